//! Command-line interface for the netweave utility
//!
//! Reads a graph or a people/organization network from JSON, runs one of the
//! layout strategies, and writes the positions as JSON.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use netweave::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use netweave::network::NetworkData;
use netweave::strategies::LayoutEngine;
use netweave::{
    AnyOf, Database, Graph, KeywordAnchor, LayoutConfig, LayoutResult, MarkedAnchor, Strategy,
};

/// Netweave - Lay out people/organization networks
#[derive(Parser)]
#[command(name = "netweave")]
#[command(about = "Compute 2D layouts for people/organization relationship graphs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a layout and print the positions as JSON
    Layout(LayoutArgs),

    /// Show the available layout strategies
    Strategies {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check input for duplicate ids and dangling edges
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// How to interpret the input
        #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
        input_format: InputFormat,
    },

    /// Print a small demo network
    Sample {
        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options for the layout command
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Input file with a graph or network (use - for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file for the positions (use - for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Layout strategy
    #[arg(short, long, value_enum, default_value_t = StrategyChoice::Force)]
    pub strategy: StrategyChoice,

    /// Seed for the force simulation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of force iterations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// JSON file with layout constants
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How to interpret the input
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Treat nodes whose role contains this term as the anchor (repeatable)
    #[arg(long = "anchor-role", value_name = "TERM")]
    pub anchor_roles: Vec<String>,

    /// Treat nodes whose name contains this text as the anchor (repeatable)
    #[arg(long = "anchor-name", value_name = "NAME")]
    pub anchor_names: Vec<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Layout strategies selectable on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StrategyChoice {
    Force,
    Hierarchical,
    Circular,
    Grid,
    Radial,
}

impl From<StrategyChoice> for Strategy {
    fn from(value: StrategyChoice) -> Self {
        match value {
            StrategyChoice::Force => Strategy::Force,
            StrategyChoice::Hierarchical => Strategy::Hierarchical,
            StrategyChoice::Circular => Strategy::Circular,
            StrategyChoice::Grid => Strategy::Grid,
            StrategyChoice::Radial => Strategy::Radial,
        }
    }
}

/// Input document shapes
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// `network` if the document has `people` or `startups`, else `graph`
    #[default]
    Auto,
    /// `{ "nodes": [...], "edges": [...] }`
    Graph,
    /// `{ "people": [...], "startups": [...], "relationships": [...] }`
    Network,
}

/// A graph read from user input
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    /// Format the input was read as (never `Auto`)
    pub format: InputFormat,
    /// Network relationships dropped for an empty endpoint
    pub dropped_relationships: usize,
}

/// Main CLI application
pub struct NetweaveApp;

impl NetweaveApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over the flag defaults
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(log_level_str.as_str()), Some(log_format_str.as_str())) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Netweave v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Layout(args) => self.layout_command(args, cli.verbose),
            Commands::Strategies { json } => self.strategies_command(json, cli.verbose),
            Commands::Validate {
                input,
                input_format,
            } => self.validate_command(input, input_format, cli.verbose),
            Commands::Sample { output } => self.sample_command(output),
        }
    }

    /// Handle the layout command
    fn layout_command(&self, args: LayoutArgs, verbose: bool) -> Result<()> {
        let content = self.read_input(args.input.clone())?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let loaded = self.load_graph(&content, args.input_format)?;
        if verbose {
            eprintln!(
                "Loaded {:?} input: {} nodes, {} edges",
                loaded.format,
                loaded.graph.node_count(),
                loaded.graph.edge_count()
            );
        }

        let result = self.compute_layout(&loaded.graph, &args)?;
        if verbose {
            eprintln!(
                "Laid out {} nodes with {} strategy",
                result.len(),
                result.strategy
            );
            if let Some(anchor) = &result.anchor {
                eprintln!("Anchor: {}", anchor);
            }
            if let Some((min, max)) = result.bounds() {
                eprintln!("Bounds: {} to {}", min, max);
            }
            if result.skipped_edges > 0 {
                eprintln!("Skipped {} dangling edge(s)", result.skipped_edges);
            }
        }

        let json = if args.pretty {
            result.to_json_pretty()?
        } else {
            result.to_json()?
        };
        self.write_output(args.output, &json)
    }

    /// Build the engine described by `args` and run it on `graph`
    pub fn compute_layout(&self, graph: &Graph, args: &LayoutArgs) -> Result<LayoutResult> {
        let config = self.build_config(args)?;
        let engine = LayoutEngine::with_config(config);
        let engine = match Self::build_detector(&args.anchor_roles, &args.anchor_names) {
            Some(detector) => engine.with_detector(detector),
            None => engine,
        };

        let strategy = Strategy::from(args.strategy);
        info!(
            strategy = strategy.as_str(),
            detector = engine.detector_name(),
            "Running layout"
        );
        Ok(engine.layout(graph, strategy)?)
    }

    /// Layout constants: config file first, then flag overrides
    pub fn build_config(&self, args: &LayoutArgs) -> Result<LayoutConfig> {
        let mut config = match &args.config {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    anyhow!("Failed to read config file '{}': {}", path.display(), e)
                })?;
                LayoutConfig::from_json(&content)
                    .with_context(|| format!("Invalid config file '{}'", path.display()))?
            }
            None => LayoutConfig::new(),
        };

        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        if let Some(iterations) = args.iterations {
            config = config.with_iterations(iterations);
        }
        Ok(config)
    }

    /// Marked nodes, plus keyword matches when any terms were given
    fn build_detector(roles: &[String], names: &[String]) -> Option<AnyOf> {
        if roles.is_empty() && names.is_empty() {
            return None;
        }
        let keywords = roles
            .iter()
            .fold(KeywordAnchor::empty(), |k, role| k.with_role_marker(role));
        let keywords = names
            .iter()
            .fold(keywords, |k, name| k.with_identifier(name));
        Some(AnyOf::new().with(MarkedAnchor).with(keywords))
    }

    /// Handle the strategies command
    fn strategies_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing layout strategies");
        }

        if json {
            let strategies: Vec<_> = Strategy::ALL
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.as_str(),
                        "description": s.description(),
                        "deterministic": s.is_deterministic(),
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "strategies": strategies,
                "default": Strategy::default().as_str(),
                "total": Strategy::ALL.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Layout strategies:");
            for strategy in Strategy::ALL {
                println!("  {:<13} - {}", strategy.as_str(), strategy.description());
            }
            println!();
            println!("Total: {} strategies", Strategy::ALL.len());
        }

        Ok(())
    }

    /// Handle the validate command
    fn validate_command(
        &self,
        input: Option<PathBuf>,
        input_format: InputFormat,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let loaded = self
            .load_graph(&content, input_format)
            .context("Invalid input")?;

        for line in Self::validation_report(&loaded) {
            println!("{}", line);
        }

        let dangling = loaded.graph.dangling_edges().len();
        if dangling > 0 {
            bail!("{} edge(s) reference unknown nodes", dangling);
        }
        Ok(())
    }

    /// Lines describing the state of a loaded graph
    pub fn validation_report(loaded: &LoadedGraph) -> Vec<String> {
        let graph = &loaded.graph;
        let dangling = graph.dangling_edges();
        let mut lines = Vec::new();

        if dangling.is_empty() {
            lines.push(format!(
                "✓ Valid {} input: {} people, {} organizations, {} edges",
                loaded.format.as_str(),
                graph.people().count(),
                graph.organizations().count(),
                graph.edge_count()
            ));
        } else {
            lines.push(format!(
                "✗ {} edge(s) reference unknown nodes",
                dangling.len()
            ));
            for edge in dangling {
                lines.push(format!("  {} -> {}", edge.source, edge.target));
            }
        }

        if loaded.dropped_relationships > 0 {
            lines.push(format!(
                "! {} relationship(s) with an empty id were dropped",
                loaded.dropped_relationships
            ));
        }
        lines
    }

    /// Handle the sample command
    fn sample_command(&self, output: Option<PathBuf>) -> Result<()> {
        let json = NetworkData::sample().to_json_pretty()?;
        self.write_output(output, &json)
    }

    /// Parse `content` as a graph or network document
    pub fn load_graph(&self, content: &str, format: InputFormat) -> Result<LoadedGraph> {
        let format = match format {
            InputFormat::Auto => Self::detect_format(content)?,
            explicit => explicit,
        };

        match format {
            InputFormat::Network => {
                let data = NetworkData::from_json(content).context("Failed to parse network")?;
                let report = data.to_graph()?;
                if report.dropped_relationships > 0 {
                    warn!(
                        dropped = report.dropped_relationships,
                        "Relationships with an empty id were dropped"
                    );
                }
                Ok(LoadedGraph {
                    graph: report.graph,
                    format,
                    dropped_relationships: report.dropped_relationships,
                })
            }
            _ => {
                let graph = Graph::from_json(content).context("Failed to parse graph")?;
                Ok(LoadedGraph {
                    graph,
                    format: InputFormat::Graph,
                    dropped_relationships: 0,
                })
            }
        }
    }

    /// Pick the input format from the top-level keys of the document
    fn detect_format(content: &str) -> Result<InputFormat> {
        let value: serde_json::Value =
            serde_json::from_str(content).context("Input is not valid JSON")?;
        let Some(object) = value.as_object() else {
            bail!("Input must be a JSON object");
        };

        if object.contains_key("people") || object.contains_key("startups") {
            Ok(InputFormat::Network)
        } else {
            Ok(InputFormat::Graph)
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if !is_stdio(&path) => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if !is_stdio(&path) => {
                fs::write(&path, &content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for NetweaveApp {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Auto => "auto",
            InputFormat::Graph => "graph",
            InputFormat::Network => "network",
        }
    }
}

/// `-` stands for stdin/stdout
fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use netweave::Point;
    use std::fs;
    use tempfile::tempdir;

    const GRAPH_JSON: &str = r#"{
        "nodes": [
            {"id": "ada", "category": "person", "label": "Ada", "role": "Founder"},
            {"id": "bo", "category": "person", "label": "Bo"},
            {"id": "acme", "category": "organization", "label": "Acme"}
        ],
        "edges": [
            {"source": "ada", "target": "acme", "label": "Founder"},
            {"source": "bo", "target": "acme", "label": "CTO"}
        ]
    }"#;

    fn layout_args(argv: &[&str]) -> LayoutArgs {
        let mut full = vec!["netweave", "layout"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Layout(args) => args,
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parsing_layout_command() {
        let args = layout_args(&[
            "--input",
            "graph.json",
            "--output",
            "positions.json",
            "--strategy",
            "grid",
            "--seed",
            "42",
            "--iterations",
            "10",
        ]);
        assert_eq!(args.input.unwrap().to_string_lossy(), "graph.json");
        assert_eq!(args.output.unwrap().to_string_lossy(), "positions.json");
        assert_eq!(args.strategy, StrategyChoice::Grid);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.iterations, Some(10));
        assert_eq!(args.input_format, InputFormat::Auto); // default
        assert!(!args.pretty);
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let args = layout_args(&[]);
        assert_eq!(args.strategy, StrategyChoice::Force);
        assert!(args.input.is_none());
        assert!(args.anchor_roles.is_empty());
    }

    #[test]
    fn test_cli_parsing_repeated_anchor_terms() {
        let args = layout_args(&[
            "--anchor-role",
            "founder",
            "--anchor-role",
            "ceo",
            "--anchor-name",
            "Ada",
        ]);
        assert_eq!(args.anchor_roles, vec!["founder", "ceo"]);
        assert_eq!(args.anchor_names, vec!["Ada"]);
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["netweave", "layout", "--strategy", "spiral"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_strategies_command() {
        let cli = Cli::try_parse_from(["netweave", "strategies", "--json"]).unwrap();
        match cli.command {
            Commands::Strategies { json } => assert!(json),
            _ => panic!("Expected Strategies command"),
        }
    }

    #[test]
    fn test_cli_parsing_validate_command() {
        let cli = Cli::try_parse_from(["netweave", "validate", "--input-format", "network"])
            .unwrap();
        match cli.command {
            Commands::Validate {
                input,
                input_format,
            } => {
                assert!(input.is_none());
                assert_eq!(input_format, InputFormat::Network);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["netweave", "sample", "--verbose", "--log-level", "debug"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_strategy_choice_covers_every_strategy() {
        for choice in StrategyChoice::value_variants() {
            let strategy = Strategy::from(*choice);
            let name = choice.to_possible_value().unwrap();
            assert_eq!(name.get_name(), strategy.as_str());
        }
        assert_eq!(StrategyChoice::value_variants().len(), Strategy::ALL.len());
    }

    #[test]
    fn test_detect_format() {
        let app = NetweaveApp::new();
        let graph = app.load_graph(GRAPH_JSON, InputFormat::Auto).unwrap();
        assert_eq!(graph.format, InputFormat::Graph);

        let sample = NetworkData::sample().to_json_pretty().unwrap();
        let network = app.load_graph(&sample, InputFormat::Auto).unwrap();
        assert_eq!(network.format, InputFormat::Network);
        assert_eq!(network.graph.node_count(), 8);
    }

    #[test]
    fn test_load_rejects_non_object() {
        let app = NetweaveApp::new();
        assert!(app.load_graph("[1, 2]", InputFormat::Auto).is_err());
        assert!(app.load_graph("not json", InputFormat::Auto).is_err());
    }

    #[test]
    fn test_load_counts_dropped_relationships() {
        let app = NetweaveApp::new();
        let input = r#"{
            "people": [{"id": "p1", "name": "Dana"}],
            "startups": [{"id": "s1", "name": "Acme"}],
            "relationships": [
                {"personId": "p1", "startupId": "s1", "role": "Founder"},
                {"personId": "", "startupId": "s1", "role": "Advisor"}
            ]
        }"#;
        let loaded = app.load_graph(input, InputFormat::Network).unwrap();
        assert_eq!(loaded.dropped_relationships, 1);
        assert_eq!(loaded.graph.edge_count(), 1);

        let report = NetweaveApp::validation_report(&loaded);
        assert!(report[0].starts_with('✓'));
        assert!(report[1].contains("dropped"));
    }

    #[test]
    fn test_validation_report_lists_dangling_edges() {
        let app = NetweaveApp::new();
        let input = r#"{"nodes": [{"id": "a", "category": "person"}],
                        "edges": [{"source": "a", "target": "ghost"}]}"#;
        let loaded = app.load_graph(input, InputFormat::Graph).unwrap();
        let report = NetweaveApp::validation_report(&loaded);
        assert!(report[0].starts_with('✗'));
        assert_eq!(report[1], "  a -> ghost");
    }

    #[test]
    fn test_duplicate_ids_fail_to_load() {
        let app = NetweaveApp::new();
        let input = r#"{"nodes": [{"id": "a", "category": "person"},
                                  {"id": "a", "category": "organization"}]}"#;
        let err = app.load_graph(input, InputFormat::Graph).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate node id"));
    }

    #[test]
    fn test_config_file_with_flag_overrides() {
        let app = NetweaveApp::new();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("layout.json");
        fs::write(
            &config_path,
            r#"{"force": {"iterations": 5, "seed": 1}, "circular": {"radius": 120.0}}"#,
        )
        .unwrap();

        let path = config_path.to_string_lossy().to_string();
        let config = app
            .build_config(&layout_args(&["--config", &path, "--seed", "9"]))
            .unwrap();
        assert_eq!(config.force.iterations, 5);
        assert_eq!(config.force.seed, Some(9));
        assert_eq!(config.circular.radius, 120.0);
    }

    #[test]
    fn test_missing_config_file() {
        let app = NetweaveApp::new();
        let result = app.build_config(&layout_args(&["--config", "/nonexistent/layout.json"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_anchor_flags_pick_anchor() {
        let app = NetweaveApp::new();
        let graph = Graph::from_json(GRAPH_JSON).unwrap();

        let result = app
            .compute_layout(&graph, &layout_args(&["-s", "hierarchical"]))
            .unwrap();
        assert_eq!(result.anchor, None);

        let result = app
            .compute_layout(
                &graph,
                &layout_args(&["-s", "hierarchical", "--anchor-name", "bo"]),
            )
            .unwrap();
        assert_eq!(result.anchor.as_deref(), Some("bo"));
        assert_eq!(result.get("bo"), Some(Point::ORIGIN));

        let result = app
            .compute_layout(
                &graph,
                &layout_args(&["-s", "hierarchical", "--anchor-role", "FOUNDER"]),
            )
            .unwrap();
        assert_eq!(result.anchor.as_deref(), Some("ada"));
    }

    #[test]
    fn test_seeded_force_is_reproducible() {
        let app = NetweaveApp::new();
        let graph = Graph::from_json(GRAPH_JSON).unwrap();
        let args = layout_args(&["--seed", "7", "--iterations", "20"]);
        let first = app.compute_layout(&graph, &args).unwrap();
        let second = app.compute_layout(&graph, &args).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.iterations, 20);
    }

    #[test]
    fn test_layout_command_writes_file() {
        let app = NetweaveApp::new();
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("graph.json");
        let output_path = dir.path().join("positions.json");
        fs::write(&input_path, GRAPH_JSON).unwrap();

        let input = input_path.to_string_lossy().to_string();
        let output = output_path.to_string_lossy().to_string();
        let args = layout_args(&["-i", &input, "-o", &output, "-s", "grid", "--pretty"]);
        app.layout_command(args, false).unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        let result: LayoutResult = serde_json::from_str(&written).unwrap();
        assert_eq!(result.strategy, Strategy::Grid);
        assert_eq!(result.len(), 3);
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_read_input_from_file() {
        let app = NetweaveApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("graph.json");
        fs::write(&file_path, GRAPH_JSON).unwrap();

        let content = app.read_input(Some(file_path)).unwrap();
        assert_eq!(content, GRAPH_JSON);
    }

    #[test]
    fn test_read_input_missing_file() {
        let app = NetweaveApp::new();
        let err = app
            .read_input(Some(PathBuf::from("/nonexistent/graph.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }

    #[test]
    fn test_sample_command_to_file() {
        let app = NetweaveApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("sample.json");

        app.sample_command(Some(file_path.clone())).unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(NetworkData::from_json(&content).unwrap(), NetworkData::sample());
    }

    #[test]
    fn test_strategies_command() {
        let app = NetweaveApp::new();
        assert!(app.strategies_command(true, false).is_ok());
        assert!(app.strategies_command(false, false).is_ok());
    }

    #[test]
    fn test_validate_command_reports_load_failure_once() {
        let app = NetweaveApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("graph.json");
        fs::write(&file_path, "{ not json").unwrap();

        let err = app
            .validate_command(Some(file_path), InputFormat::Auto, false)
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Invalid input"));
        assert!(message.contains("not valid JSON"));
    }

    #[test]
    fn test_validate_command_fails_on_dangling_edges() {
        let app = NetweaveApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("graph.json");
        fs::write(
            &file_path,
            r#"{"nodes": [], "edges": [{"source": "a", "target": "b"}]}"#,
        )
        .unwrap();

        assert!(app
            .validate_command(Some(file_path), InputFormat::Auto, false)
            .is_err());
    }
}
