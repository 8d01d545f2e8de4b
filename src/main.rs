use std::process;
use clap::Parser;
use dotenv::dotenv;
use log::*;

use check_consul::{run, version_banner, Opts, ProbeError, Severity};

fn main()
{
    dotenv().ok();
    env_logger::init();

    // clap exits with 2 on a usage error, which a monitoring system reads as critical.
    let options = Opts::try_parse().unwrap_or_else(|error| {
        if error.use_stderr() {
            let _ = error.print();
            process::exit(Severity::Unknown.exit_code());
        }
        error.exit()
    });

    if options.version {
        println!("{}", version_banner());
        process::exit(0);
    }

    match run(&options) {
        Ok(outcome) => {
            println!("{}", outcome.text);
            process::exit(outcome.exit_code());
        }
        Err(error) => {
            let exit_code = error.downcast_ref::<ProbeError>()
                .map(ProbeError::exit_code)
                .unwrap_or_else(|| Severity::Unknown.exit_code());
            debug!("run failed: {:?}", error);
            println!("{}", error);
            process::exit(exit_code);
        }
    }
}
