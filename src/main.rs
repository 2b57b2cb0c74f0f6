mod config;
mod fetch;
mod logger;
mod menu;
mod status;

use std::{io, process};

use config::Config;
use status::StatusBuffer;

use crate::{fetch::fetch, logger::init_logger, menu::write_menu};

// sysexits.h
const EX_OSERR: i32 = 71;
const EX_IOERR: i32 = 74;

fn main() {
    /*
     * A broken config must not cost the status bar its button,
     * so it is reported once the logger is up and the defaults are used
     */
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logger(&config.log_level);

    if let Some(err) = config_error {
        log::warn!("{}, using defaults", err);
    }

    log::debug!("loaded config {:#?}", config);

    /*
     * Allocation is the only fatal failure, and it happens before
     * anything is written so the host never sees a partial menu
     */
    let buffer = match StatusBuffer::allocate(config.capacity) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!(
                "unable to allocate a status buffer of {} bytes, {}",
                config.capacity, err
            );
            log::error!("allocation failed, exiting with {}", EX_OSERR);

            process::exit(EX_OSERR);
        }
    };

    log::debug!("allocated a status buffer of {} bytes", buffer.capacity());

    let text = fetch(&config.command, buffer);
    let state = text.state();
    let icon_name = state.icon_name();

    if text.is_empty() {
        log::debug!("no status text");
    } else {
        log::debug!("status text ({} bytes): {:?}", text.len(), text.to_string());
    }

    log::info!("state {}, icon \"{}\"", state, icon_name);

    let stdout = io::stdout();

    if let Err(err) = write_menu(&mut stdout.lock(), icon_name, &config.image, &text) {
        log::error!("unable to write the menu, {}", err);

        process::exit(EX_IOERR);
    }
}
