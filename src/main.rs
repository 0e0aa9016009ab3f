use iced_carousel::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap(),
        bg: args.contains("--bg"),
        no_master_spinner: args.contains("--no-master-spinner"),
        sources: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };

    app::run(flags)
}
