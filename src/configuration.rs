use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn data_dir(&self) -> Option<PathBuf>;
    fn horizon_days(&self) -> usize;
}
