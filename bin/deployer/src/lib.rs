pub mod config;

use deploy::{mocks::DeployMocks, Deployments, Step};

/// Deployment steps in their run order.
pub fn builtin_steps<D: Deployments + 'static>() -> Vec<Box<dyn Step<D>>> {
    vec![Box::new(DeployMocks)]
}
