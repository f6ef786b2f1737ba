//! Look a service up in a saved device description and print its endpoints
//!
//! Usage: cargo run -p upnp-sample-util --example describe_service -- \
//!     <description.xml> <location> <service-type>
//!
//! Set UPNP_SAMPLE_LOG_MODE=development to see lookup diagnostics on stderr.

use std::fs;
use std::process::ExitCode;

use sample_util::{logging, sample_print, ConsoleSink, SampleUtil};

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging_from_env() {
        eprintln!("{}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, location, service_type] = args.as_slice() else {
        eprintln!("usage: describe_service <description.xml> <location> <service-type>");
        return ExitCode::FAILURE;
    };

    let xml = match fs::read_to_string(path) {
        Ok(xml) => xml,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let util = SampleUtil::new();
    util.initialize(ConsoleSink);

    let found = match util.find_service_in_xml(&xml, location, service_type) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let code = match found {
        Some(endpoints) => {
            let _display = util.display_lock();
            sample_print!(util, "controlURL: {}\n", endpoints.control_url.as_deref().unwrap_or("-"));
            sample_print!(util, "eventURL: {}\n", endpoints.event_url.as_deref().unwrap_or("-"));
            ExitCode::SUCCESS
        }
        None => {
            sample_print!(util, "Service {} not found\n", service_type);
            ExitCode::FAILURE
        }
    };

    util.finish();
    code
}
