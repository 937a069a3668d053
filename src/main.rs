use anyhow::Result;

fn main() -> Result<()> {
    credsample::run()
}
