use handle_result::{handle, Status};

#[handle]
fn flush(fail: bool) -> Status {
    if fail {
        Status::errorf(format_args!("disk full")).or_error("flush")?;
    }
    Status::ok()
}

fn main() {
    assert_eq!(flush(true).message(), "flush: disk full");
    assert!(flush(false).is_ok());
}
