//! ractivity main entrypoint.

use ractivity::run;
use ractivity::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
