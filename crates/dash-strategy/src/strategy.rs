//! Strategy initialization
//!
//! `Strategy::initialize` is the only way to get a strategy: it fetches the
//! registries, merges the options and builds the index in one go. A
//! `Session` holds the result for the lifetime of a dashboard and makes sure
//! initialization happens at most once.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use dash_config::{default_options, merge_options, options_from_json, StrategyOptions};
use dash_core::StateSnapshot;
use dash_registries::{fetch_registries, IconResources, PluginConfig, RegistrySnapshot, RegistrySource};

use crate::error::StrategyResult;
use crate::index::RegistryIndex;
use crate::query::Query;

/// The resolved model of one dashboard: read-only once built
#[derive(Debug)]
pub struct Strategy {
    index: RegistryIndex,
    options: StrategyOptions,
    plugin: PluginConfig,
    icons: IconResources,
    states: StateSnapshot,
}

impl Strategy {
    /// Fetch the registries and build the model
    ///
    /// `user_options` is the strategy configuration handed over by the host,
    /// either bare or as a dashboard document with a `strategy` key. Any
    /// failed registry read aborts the whole build.
    pub async fn initialize(
        source: &dyn RegistrySource,
        states: StateSnapshot,
        user_options: serde_json::Value,
    ) -> StrategyResult<Self> {
        let user_options = options_from_json(user_options)?;
        let registries = fetch_registries(source).await?;
        Ok(Self::from_registries(registries, states, user_options))
    }

    /// Build the model from registries already at hand
    pub fn from_registries(
        registries: RegistrySnapshot,
        states: StateSnapshot,
        user_options: StrategyOptions,
    ) -> Self {
        let options = merge_options(&default_options(), user_options);
        debug!(
            areas = options.areas.len(),
            domains = options.domains.len(),
            views = options.views.len(),
            "Options merged"
        );
        let index = RegistryIndex::build(&registries, &states, &options);

        Self {
            index,
            options,
            plugin: registries.plugin,
            icons: registries.icons,
            states,
        }
    }

    pub fn index(&self) -> &RegistryIndex {
        &self.index
    }

    pub fn options(&self) -> &StrategyOptions {
        &self.options
    }

    pub fn plugin(&self) -> &PluginConfig {
        &self.plugin
    }

    pub fn icons(&self) -> &IconResources {
        &self.icons
    }

    pub fn states(&self) -> &StateSnapshot {
        &self.states
    }

    pub fn query(&self) -> Query<'_> {
        Query::new(Some(self))
    }
}

/// One dashboard session
///
/// Readers share the strategy through `query()`; before initialization they
/// get an empty façade.
#[derive(Debug, Default)]
pub struct Session {
    strategy: OnceCell<Arc<Strategy>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the session, or return the strategy it already holds
    ///
    /// Concurrent callers wait for the first initialization. A failed
    /// initialization leaves the session empty.
    pub async fn initialize(
        &self,
        source: &dyn RegistrySource,
        states: StateSnapshot,
        user_options: serde_json::Value,
    ) -> StrategyResult<Arc<Strategy>> {
        if let Some(strategy) = self.strategy.get() {
            debug!("Session already initialized");
            return Ok(strategy.clone());
        }

        let strategy = self
            .strategy
            .get_or_try_init(move || async move {
                Strategy::initialize(source, states, user_options)
                    .await
                    .map(Arc::new)
            })
            .await;

        match strategy {
            Ok(strategy) => {
                info!("Dashboard strategy initialized");
                Ok(strategy.clone())
            }
            Err(e) => {
                error!(error = %e, "{}", e.user_message());
                Err(e)
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.strategy.initialized()
    }

    pub fn strategy(&self) -> Option<Arc<Strategy>> {
        self.strategy.get().cloned()
    }

    pub fn query(&self) -> Query<'_> {
        Query::new(self.strategy.get().map(Arc::as_ref))
    }
}
