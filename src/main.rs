use anyhow::Result;

fn main() -> Result<()> {
    codebase_consolidator::cli::run()
}
