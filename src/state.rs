use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    record::{demo_record, PortalRecord},
};

pub struct State {
    pub config: Config,
    pub record: PortalRecord,
}

impl State {
    pub fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load();

        let record = demo_record();
        record.validate()?;

        Ok(Arc::new(Self { config, record }))
    }
}
