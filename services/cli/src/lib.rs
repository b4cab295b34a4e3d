mod cli;
mod sort;

use name_sorter::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
