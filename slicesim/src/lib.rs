/*!
# Slice Simulator service

HTTP front end of [`slicesim_core`]: clients post a topology with user and
IoT counts to `/api/simulate` and read back every past result from
`/api/results`.

```no_run
use slicesim::{ServiceConfig, SimContext};
use std::sync::Arc;

# async fn run() -> anyhow::Result<()> {
let config = ServiceConfig::default();
let context = Arc::new(SimContext::new(&config));
slicesim::serve(&config, context).await?;
# Ok(())
# }
```
*/

pub mod api;
pub mod config;
mod context;
pub mod report;
mod server;

pub use self::{
    api::{ApiError, SimulateRequest},
    config::{Cli, Command, ServiceConfig, SimulateArgs},
    context::{SeedSource, SimContext, TopologyStore},
    server::{router, serve},
};
