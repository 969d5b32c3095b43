use std::env;
use std::net::SocketAddr;
use std::process;

use getopts::{Matches, Options};

use crate::config::{DEFAULT_MONTHS, DEFAULT_SITE};

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub address: SocketAddr,
    pub site: String,
    pub months: usize,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:$PORT or 127.0.0.1:5000]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "s",
        "site",
        "Base URL of the school website [Default: https://www.maret.org]",
        "URL",
    );
    opts.optopt(
        "m",
        "months",
        "Number of calendar months served when a request does not ask [Default: 2]",
        "MONTHS",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    match args_from(&matches, env::var("PORT").ok()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn args_from(matches: &Matches, port: Option<String>) -> Result<Args, String> {
    let port = match port {
        Some(port) => port
            .parse::<u16>()
            .map_err(|err| format!("`PORT` environment variable is invalid: {err}"))?,
        None => DEFAULT_PORT,
    };

    let address = matches
        .opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], port)))
        .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?;

    let site = matches
        .opt_str("site")
        .unwrap_or_else(|| DEFAULT_SITE.to_string());

    let months = matches
        .opt_get_default("months", DEFAULT_MONTHS)
        .map_err(|err| format!("Provided value for option 'months' is invalid: {err}"))?;

    if months == 0 {
        return Err("Provided value for option 'months' must be at least 1".into());
    }

    Ok(Args {
        address,
        site,
        months,
    })
}
