use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use coord2::{Coord, Diagnostics, GeomError, Plane, PlaneCfg, SqrtStrategy, Strategy};
use serde::Serialize;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

type Point = Coord<f64>;

#[derive(Parser, Debug)]
#[command(name = "coord2-cli")]
#[command(about = "Evaluate 2D coordinate queries")]
struct Cmd {
    /// Use the fast approximate square root
    #[arg(long, global = true)]
    fast: bool,

    /// Fail on degenerate geometry instead of printing a diagnostic and 0
    #[arg(long, global = true)]
    strict: bool,

    /// Where lenient mode reports degenerate geometry
    #[arg(long, global = true, value_enum, default_value_t = DiagArg::Stdout)]
    diagnostics: DiagArg,

    /// Print a JSON object instead of the bare value
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DiagArg {
    Stdout,
    Log,
    Silent,
}

impl From<DiagArg> for Diagnostics {
    fn from(value: DiagArg) -> Self {
        match value {
            DiagArg::Stdout => Diagnostics::Stdout,
            DiagArg::Log => Diagnostics::Log,
            DiagArg::Silent => Diagnostics::Silent,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Euclidean distance between A and B
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: Point,
        #[arg(allow_hyphen_values = true)]
        b: Point,
    },
    /// Manhattan distance between A and B
    Manhattan {
        #[arg(allow_hyphen_values = true)]
        a: Point,
        #[arg(allow_hyphen_values = true)]
        b: Point,
    },
    /// Slope of the line through A and B
    Slope {
        #[arg(allow_hyphen_values = true)]
        a: Point,
        #[arg(allow_hyphen_values = true)]
        b: Point,
    },
    /// Area of triangle ABC
    Area {
        #[arg(allow_hyphen_values = true)]
        a: Point,
        #[arg(allow_hyphen_values = true)]
        b: Point,
        #[arg(allow_hyphen_values = true)]
        c: Point,
    },
    /// Radius of the circle through A, B and C
    Radius {
        #[arg(allow_hyphen_values = true)]
        a: Point,
        #[arg(allow_hyphen_values = true)]
        b: Point,
        #[arg(allow_hyphen_values = true)]
        c: Point,
    },
    /// Compare fast and exact square roots of V
    Sqrt {
        #[arg(allow_hyphen_values = true)]
        v: f64,
    },
}

#[derive(Debug, Serialize, PartialEq)]
struct Report {
    query: &'static str,
    inputs: Vec<String>,
    strategy: &'static str,
    value: f64,
}

#[derive(Debug, Serialize, PartialEq)]
struct SqrtReport {
    input: f64,
    exact: f64,
    fast: f64,
    relative_error: f64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
enum Output {
    Query(Report),
    Sqrt(SqrtReport),
}

impl Output {
    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }
        match self {
            Output::Query(report) => println!("{}", report.value),
            Output::Sqrt(report) => {
                println!("exact: {}", report.exact);
                println!("fast: {}", report.fast);
                println!("relative error: {:e}", report.relative_error);
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let cmd = Cmd::parse();
    let Some(action) = &cmd.action else {
        return Ok(());
    };
    evaluate(&cmd, action)?.print(cmd.json)
}

fn plane(cmd: &Cmd) -> Plane<Strategy> {
    let strategy = if cmd.fast {
        Strategy::Fast
    } else {
        Strategy::Exact
    };
    Plane::with_cfg(
        strategy,
        PlaneCfg {
            diagnostics: cmd.diagnostics.into(),
        },
    )
}

fn evaluate(cmd: &Cmd, action: &Action) -> Result<Output> {
    let p = plane(cmd);
    let strict = |res: Result<f64, GeomError>| -> Result<f64> {
        res.with_context(|| format!("{} query on degenerate input", query_name(action)))
    };
    let (inputs, value) = match action {
        Action::Distance { a, b } => (vec![a, b], p.distance(a, b)),
        Action::Manhattan { a, b } => (vec![a, b], p.manhattan_distance(a, b)),
        Action::Slope { a, b } if cmd.strict => (vec![a, b], strict(p.try_slope(a, b))?),
        Action::Slope { a, b } => (vec![a, b], p.slope(a, b)),
        Action::Area { a, b, c } => (vec![a, b, c], p.triangle_area(a, b, c)),
        Action::Radius { a, b, c } if cmd.strict => {
            (vec![a, b, c], strict(p.try_circumradius(a, b, c))?)
        }
        Action::Radius { a, b, c } => (vec![a, b, c], p.circumradius(a, b, c)),
        Action::Sqrt { v } => return Ok(Output::Sqrt(compare_sqrt(*v))),
    };
    let report = Report {
        query: query_name(action),
        inputs: inputs.iter().map(ToString::to_string).collect(),
        strategy: p.sqrt.name(),
        value,
    };
    tracing::info!(query = report.query, strategy = report.strategy, value, "evaluate");
    Ok(Output::Query(report))
}

fn compare_sqrt(v: f64) -> SqrtReport {
    let exact = Strategy::Exact.sqrt(v);
    let fast = Strategy::Fast.sqrt(v);
    let relative_error = if exact == 0.0 {
        (fast - exact).abs()
    } else {
        (fast - exact).abs() / exact
    };
    tracing::info!(v, exact, fast, relative_error, "sqrt");
    SqrtReport {
        input: v,
        exact,
        fast,
        relative_error,
    }
}

fn query_name(action: &Action) -> &'static str {
    match action {
        Action::Distance { .. } => "distance",
        Action::Manhattan { .. } => "manhattan",
        Action::Slope { .. } => "slope",
        Action::Area { .. } => "area",
        Action::Radius { .. } => "radius",
        Action::Sqrt { .. } => "sqrt",
    }
}
