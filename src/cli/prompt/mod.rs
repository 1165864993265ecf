//! Prompt command - shows what the judge will be sent

use super::PromptArgs;
use crate::domain::case::PROMPT_VERSION;

pub async fn run(args: PromptArgs) -> anyhow::Result<bool> {
    super::bootstrap()?;
    let cases = super::load_cases(&args.file).await?;

    for (index, case) in cases.iter().enumerate() {
        println!(
            "## {} (prompt v{})\n{}<judged text>\n",
            case.display_name(index),
            PROMPT_VERSION,
            case.full_prompt()
        );
    }

    Ok(true)
}
