use cubegrid::{App, RendererSettings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    App::new(RendererSettings::default())
        .with_title("cubegrid")
        .run()?;

    Ok(())
}
