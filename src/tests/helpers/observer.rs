use crate::scanner::ScanObserver;

/// Observer that ignores everything
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
