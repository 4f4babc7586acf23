// SPDX-License-Identifier: MPL-2.0
use comet_planner::app::{self, paths, Flags};
use comet_planner::logging;

const HELP: &str = "\
Comet Planner

USAGE:
  comet_planner [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --plan <ID>            Plan to open
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding plan files
  --hide-tabs            Start with the section tabs hidden
  -h, --help             Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        plan_id: opt_string(&mut args, "--plan"),
        config_dir: opt_string(&mut args, "--config-dir"),
        data_dir: opt_string(&mut args, "--data-dir"),
        hide_tabs: args.contains("--hide-tabs"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional string flag; a malformed value is logged and ignored.
fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring {key}: {err}");
            None
        }
    }
}
