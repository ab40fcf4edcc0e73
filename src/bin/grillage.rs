//! Generate a grillage mesh and its OpenSees script from a project file
//!
//! Usage: `grillage <project.json> [output.py]`

use anyhow::{bail, Context};
use log::info;

use grillage_mesh::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().map(String::as_str).unwrap_or("grillage");
        bail!("usage: {} <project.json> [output.py]", program);
    }

    let project = ProjectFile::from_json_file(&args[1])
        .with_context(|| format!("failed to load project file {}", args[1]))?;
    let mesh = GrillageMesh::generate(&project.mesh).context("mesh generation failed")?;

    let summary = mesh.summary();
    info!(
        "{} nodes, {} elements, {} start / {} end supports",
        summary.num_nodes, summary.num_elements, summary.num_start_supports, summary.num_end_supports
    );

    let mut script = OpenSeesScript::new(&mesh, &project.sections);
    if let Some(name) = &project.name {
        script = script.with_name(name.clone());
    }

    match args.get(2) {
        Some(path) => {
            script
                .write_to(path)
                .with_context(|| format!("failed to write script to {}", path))?;
            info!("script written to {}", path);
        }
        None => print!("{}", script.render()?),
    }
    Ok(())
}
