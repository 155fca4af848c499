use handle_result::{handle_return, Status};

#[handle_return]
fn report(fail: bool, quiet: bool) {
    let s = if fail {
        Status::errorf(format_args!("down"))
    } else {
        Status::ok()
    };
    s.or_do_and_return(|e| eprintln!("skipping: {}", e))?;
    if quiet {
        return;
    }
    println!("up");
}

fn main() {
    report(true, false);
    report(false, true);
    report(false, false);
}
