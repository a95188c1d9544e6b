use std::path::Path;
use svgfit::{AnalysisOptions, AnalysisResult};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Analysis(svgfit::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Analysis(err) => write!(f, "Error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<svgfit::Error> for CliError {
    fn from(value: svgfit::Error) -> Self {
        Self::Analysis(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    show_fix: bool,
    json: bool,
    pretty: bool,
    config: Option<String>,
}

fn usage() -> &'static str {
    "svgfit-cli - Analyze SVG files for centering and padding\n\
\n\
USAGE:\n\
  svgfit-cli [--fix] [--json] [--pretty] [--config <path>] [<path>]\n\
\n\
ARGUMENTS:\n\
  <path>   SVG file or directory containing SVG files (default: current directory)\n\
\n\
OPTIONS:\n\
  -h, --help         Show this help message\n\
  --fix              Show suggested viewBox values for files with issues\n\
  --json             Print results as JSON instead of the text report\n\
  --pretty           Indent JSON output\n\
  --config <path>    JSON file overriding analysis thresholds\n\
\n\
NOTES:\n\
  - Directories are scanned non-recursively for *.svg files.\n\
  - Set SVGFIT_LOG (e.g. SVGFIT_LOG=debug) for diagnostics on stderr.\n\
\n\
EXIT CODES:\n\
  0   All files analyzed without issues\n\
  1   One or more files had issues, or analysis failed\n\
  2   Usage error\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--fix" | "-fix" => args.show_fix = true,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render_report(results: &[AnalysisResult], show_fix: bool) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for r in results {
        let status = if r.has_issues { "✗" } else { "✓" };
        let _ = writeln!(out, "{status} {}", display_name(&r.file_path));
        if let (Some(vb), Some(c)) = (r.view_box, r.content_box) {
            let _ = writeln!(
                out,
                "  ViewBox: {:.1} {:.1} {:.1} {:.1}",
                vb.x, vb.y, vb.width, vb.height
            );
            let _ = writeln!(
                out,
                "  Content: {:.1},{:.1} to {:.1},{:.1} ({:.1}x{:.1})",
                c.min_x,
                c.min_y,
                c.max_x,
                c.max_y,
                c.width(),
                c.height()
            );
            let p = r.padding;
            let _ = writeln!(
                out,
                "  Padding: L:{:.1}% R:{:.1}% T:{:.1}% B:{:.1}%",
                p.left, p.right, p.top, p.bottom
            );
            let _ = writeln!(
                out,
                "  Center offset: X:{:.1} Y:{:.1}",
                r.center_offset_x, r.center_offset_y
            );
        }
        let _ = writeln!(out, "  Assessment: {}", r.assessment);
        if show_fix && r.has_issues {
            if let Some(s) = r.suggested_view_box.as_deref() {
                let _ = writeln!(out, "  Suggested viewBox: {s}");
            }
        }
        out.push('\n');
    }
    out
}

fn write_json(results: &[AnalysisResult], pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(stdout, results)?;
    } else {
        serde_json::to_writer(stdout, results)?;
    }
    println!();
    Ok(())
}

/// Returns whether any analyzed file had issues.
fn run(args: Args) -> Result<bool, CliError> {
    let opts = match args.config.as_deref() {
        Some(path) => AnalysisOptions::from_json_file(path)?,
        None => AnalysisOptions::default(),
    };
    let input = args.input.as_deref().unwrap_or(".");
    tracing::debug!(input, ?opts, "starting analysis");

    let results = svgfit::analyze_path(input, &opts)?;
    if args.json {
        write_json(&results, args.pretty)?;
    } else {
        print!("{}", render_report(&results, args.show_fix));
    }
    Ok(svgfit::any_issues(&results))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SVGFIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    match run(args) {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("svgfit-cli")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_flags_and_path() {
        let a = parse_args(&argv(&["--fix", "icons", "--json", "--config", "t.json"]))
            .expect("args");
        assert!(a.show_fix && a.json && !a.pretty);
        assert_eq!(a.input.as_deref(), Some("icons"));
        assert_eq!(a.config.as_deref(), Some("t.json"));

        let a = parse_args(&argv(&["-fix"])).expect("args");
        assert!(a.show_fix);
        assert_eq!(a.input, None);
    }

    #[test]
    fn rejects_bad_usage() {
        let cases: [&[&str]; 5] = [
            &["--help"],
            &["--nope"],
            &["a.svg", "b.svg"],
            &["--config"],
            &["--", "a", "b"],
        ];
        for bad in cases {
            assert!(
                matches!(parse_args(&argv(bad)), Err(CliError::Usage(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn report_shows_geometry_and_fix_only_when_requested() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><rect x="45" y="45" width="10" height="10"/></svg>"#;
        let r = svgfit::analyze_svg_str("dir/padded.svg", svg, &AnalysisOptions::default())
            .expect("analysis");
        let results = [r];

        let text = render_report(&results, false);
        assert!(text.starts_with("✗ padded.svg\n"), "{text}");
        assert!(text.contains("  ViewBox: 0.0 0.0 100.0 100.0\n"));
        assert!(text.contains("  Content: 45.0,45.0 to 55.0,55.0 (10.0x10.0)\n"));
        assert!(text.contains("  Padding: L:45.0% R:45.0% T:45.0% B:45.0%\n"));
        assert!(text.contains("  Center offset: X:0.0 Y:0.0\n"));
        assert!(text.contains("  Assessment: excessive padding (max 45.0%)\n"));
        assert!(!text.contains("Suggested viewBox"));

        let text = render_report(&results, true);
        assert!(text.contains("  Suggested viewBox: 44.4 44.4 11.1 11.1\n"), "{text}");
    }

    #[test]
    fn report_for_error_entry_has_no_geometry() {
        let err = svgfit::Error::MissingViewBox;
        let results = [AnalysisResult::from_error("x.svg", &err)];
        let text = render_report(&results, true);
        assert_eq!(
            text,
            "✗ x.svg\n  Assessment: Error: no viewBox or width/height found\n\n"
        );
    }
}
