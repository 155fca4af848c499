//! Looks up `key=value` settings from the command line.
//!
//! Run with: cargo run --example lookup -- port=8080 host=local port host missing

use std::collections::HashMap;

use handle_result::{handle, handle_return, Unwind, Val, Vals};

#[handle]
fn parse_setting(arg: &str) -> Vals<String, String> {
    let (k, v) = Val::from_result(
        arg.split_once('=')
            .ok_or_else(|| handle_result::format_err!("expected key=value, got {:?}", arg)),
    )
    .or_error("parse")?;
    Vals::new(k.to_string(), v.to_string())
}

#[handle]
fn port(settings: &HashMap<String, String>) -> Val<u16> {
    let raw = Val::from_map(settings, "port").or_error("port")?;
    let port = Val::from_result(raw.parse::<u16>()).or_error("port")?;
    Val::new(port)
}

#[handle_return]
fn show(settings: &HashMap<String, String>, key: &str) {
    let value = Val::from_map(settings, key)
        .or_do_and_return(|e| println!("{}: skipped ({})", key, e))?;
    println!("{} = {}", key, value);
}

fn main() -> Result<(), Unwind> {
    let mut settings = HashMap::new();
    let mut queries = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg.contains('=') {
            let (k, v) = parse_setting(&arg).or_error("arguments")?;
            settings.insert(k, v);
        } else {
            queries.push(arg);
        }
    }

    for key in &queries {
        show(&settings, key);
    }

    let p = port(&settings);
    if let Some(e) = p.err() {
        println!("no port: {}", e);
    }
    println!("listening on {}", p.or_use(80));
    Ok(())
}
