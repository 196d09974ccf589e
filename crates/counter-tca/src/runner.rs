//! Effect runner - executes effects on the tokio runtime
//!
//! Each effect becomes its own task. Tasks are not serialized against each
//! other, so overlapping fact requests may complete in any order.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::effect::Effect;
use numbers_client::{FactClient, FactError};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct EffectRunner {
    runtime: Handle,
    client: Arc<dyn FactClient>,
    /// Simulated latency before each fetch
    fact_delay: Duration,
    dispatcher: Dispatcher,
}

impl EffectRunner {
    pub fn new(
        runtime: Handle,
        client: Arc<dyn FactClient>,
        fact_delay: Duration,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            runtime,
            client,
            fact_delay,
            dispatcher,
        }
    }

    /// Spawn the task for `effect`
    ///
    /// Follow-up actions go through the dispatcher. A failed fetch is logged
    /// and dispatches nothing, so the loading flag stays set.
    pub fn run(&self, effect: Effect) -> JoinHandle<()> {
        match effect {
            Effect::FetchFact { count } => {
                let client = Arc::clone(&self.client);
                let dispatcher = self.dispatcher.clone();
                let delay = self.fact_delay;

                self.runtime.spawn(async move {
                    match fetch_fact(client.as_ref(), count, delay).await {
                        Ok(fact) => {
                            log::info!("Fact for {} received", count);
                            dispatcher.dispatch(Action::FactReceived(fact));
                        }
                        Err(e) => {
                            log::error!("Fact fetch for {} failed: {}", count, e);
                        }
                    }
                })
            }
        }
    }
}

async fn fetch_fact(
    client: &dyn FactClient,
    count: i64,
    delay: Duration,
) -> Result<String, FactError> {
    log::debug!("Fetching fact for {} in {:?}", count, delay);
    tokio::time::sleep(delay).await;
    client.fetch_fact(count).await
}
