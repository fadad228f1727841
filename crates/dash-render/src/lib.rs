//! Dashboard rendering from registry dumps
//!
//! Loads a dump directory through [`DumpChannel`], initializes a strategy
//! session against it and renders one of the outputs a dashboard is built
//! from: the resolved model, the home chips, or a single count expression.

pub mod dump;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::info;

use dash_config::OptionsLoader;
use dash_registries::ChannelRegistrySource;
use dash_strategy::{AreaScope, ChipRegistry, Selection, Session, Strategy};
use dash_template::{Operator, StateFilter, StateValue};

pub use dump::{load_states, DumpChannel};

/// What to render
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Floors, areas and Magic Areas devices as resolved
    Model,
    /// Chips of the home view
    Chips,
    /// Count expression for one domain; `in` and `not_in` take a
    /// comma-separated value
    Count {
        domain: String,
        area: Option<String>,
        operator: Operator,
        value: String,
    },
}

/// Inputs of a render
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Dump directory
    pub dump_dir: PathBuf,
    /// Optional YAML strategy options
    pub options: Option<PathBuf>,
    pub output: Output,
}

/// Load strategy options from YAML, empty when no file is given
fn load_options(path: Option<&Path>) -> Result<Value> {
    let Some(path) = path else {
        return Ok(json!({}));
    };
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let options = OptionsLoader::new(base_dir)
        .load_file(path)
        .with_context(|| format!("failed to load options from {}", path.display()))?;
    Ok(serde_json::to_value(options)?)
}

/// Initialize a session from the request's dump and render its output
pub async fn render(request: &RenderRequest) -> Result<Value> {
    let states = load_states(&request.dump_dir)?;
    let options = load_options(request.options.as_deref())?;
    let source = ChannelRegistrySource::new(DumpChannel::new(&request.dump_dir));

    let session = Session::new();
    let strategy = session.initialize(&source, states, options).await?;
    info!(dump = %request.dump_dir.display(), "Rendering {:?}", request.output);

    Ok(render_output(&strategy, &request.output))
}

/// Render one output from an initialized strategy
pub fn render_output(strategy: &Strategy, output: &Output) -> Value {
    let query = strategy.query();
    match output {
        Output::Model => model(strategy),
        Output::Chips => Value::Array(ChipRegistry::new().home_chips(&query)),
        Output::Count {
            domain,
            area,
            operator,
            value,
        } => {
            let scope = area
                .as_deref()
                .map(AreaScope::from_slug)
                .unwrap_or_default();
            let selection = Selection::new(domain).scope(scope);
            let value = match operator {
                Operator::In | Operator::NotIn => {
                    StateValue::from(value.split(',').map(str::trim).map(String::from).collect::<Vec<_>>())
                }
                _ => StateValue::from(value.as_str()),
            };
            let filter = StateFilter::new(*operator, value);
            Value::String(query.count_expr(&selection, &filter, ""))
        }
    }
}

fn model(strategy: &Strategy) -> Value {
    let index = strategy.index();
    let floors: Vec<Value> = index
        .ordered_floors()
        .into_iter()
        .map(|floor| {
            json!({
                "floor": floor,
                "areas": index.areas_on_floor(&floor.floor_id),
            })
        })
        .collect();

    json!({
        "floors": floors,
        "areas": index.ordered_areas(),
        "magic_areas": index.magic_areas,
        "entities": index.entities.len(),
    })
}
