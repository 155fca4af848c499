use handle_result::{Unwind, Val};

fn main() -> Result<(), Unwind> {
    let n = Val::new(3).or_error("startup")?;
    assert_eq!(n, 3);
    Ok(())
}
