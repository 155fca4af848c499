use handle_result::{handle_error, Error, Val};

#[derive(Debug)]
struct AppError(String);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        AppError(e.to_string())
    }
}

#[handle_error]
fn port(raw: &str) -> Result<u16, AppError> {
    let p = Val::from_result(raw.parse::<u16>()).or_error("port")?;
    if p == 0 {
        return Err(AppError("zero".into()));
    }
    Ok(p)
}

fn main() {
    assert_eq!(port("80").unwrap(), 80);
    assert_eq!(port("x").unwrap_err().0, "port: invalid digit found in string");
    assert_eq!(port("0").unwrap_err().0, "zero");
}
