use anyhow::Result;

fn main() -> Result<()> {
    chronogram::run()
}
