//! Score command - Scores a password from the terminal.

use crate::cli::args::ScoreArgs;
use crate::domain::score_password;
use crate::errors::AppResult;

/// Execute the score command
pub async fn execute(args: ScoreArgs) -> AppResult<()> {
    let strength = score_password(&args.password);

    println!("Score: {}/100 ({})", strength.score, strength.band());

    if strength.missing_requirements.is_empty() {
        println!("All requirements met");
    } else {
        println!("Missing requirements:");
        for requirement in &strength.missing_requirements {
            println!("  - {}", requirement);
        }
    }

    Ok(())
}
