mod cli;
mod ui;

use log::debug;
use regtest_report::report::DiffPage;
use regtest_report::{ReportWriter, RunSummary, load_config};
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let config = match load_config(&args.config) {
        Ok(c) => c.with_overrides(args.refdir.clone(), args.tstdir.clone()),
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let summary = match RunSummary::load(&args.results) {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };
    debug!("Loaded {} test records from {}", summary.tests.len(), args.results.display());
    if summary.tests.is_empty() {
        ui::print_warning("the run contains no tests; writing empty reports");
    }

    let writer = ReportWriter::new(&config, &summary);

    if args.stdout {
        let supports_color = ui::stdout_supports_color();
        let mut out = io::stdout().lock();
        if let Err(e) = writer.write_text(&mut out, supports_color) {
            ui::print_error(&format!("Failed to print text log: {}", e));
        }
    }

    ui::status(&format!("... Writing text log: {}", writer.text_log_path().display()));
    if !args.no_html {
        ui::status(&format!("... Writing html log: {}", writer.index_path().display()));
    }

    let artifacts = writer.write_all(!args.no_html);
    for e in artifacts.errors() {
        ui::print_error(&format!("Failed to write report: {}", e));
    }

    for page in artifacts.diff_pages.values() {
        match page {
            DiffPage::Written { path, .. } => {
                ui::status(&format!("... Writing html diff: {}", path.display()));
            }
            DiffPage::Failed { link, reason } => {
                ui::print_warning(&format!("diff page {} skipped: {}", link, reason));
            }
        }
    }

    let tally = writer.tally();
    let failing = summary.failing().count();
    ui::status(&format!("{} of {} tests reported problems", failing, tally.total()));

    if !artifacts.is_complete() {
        std::process::exit(1);
    }
}
