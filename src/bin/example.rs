//! Grillage Example - 24.6 m bridge deck

use grillage_mesh::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Grillage Example: 24.6 m deck ===\n");

    // 5 girders between 2 m cantilevers, 7 transverse grid lines
    let config = MeshConfig::new(24.6, 10.175, 20.0, 5, 7, 2.0).with_strategy(MeshStrategy::Skew);
    let mesh = GrillageMesh::generate(&config)?;

    let summary = mesh.summary();
    println!("Strategy:  {}", summary.strategy);
    println!("Nodes:     {}", summary.num_nodes);
    println!("Elements:  {}", summary.num_elements);
    println!(
        "Supports:  {} start (pinned), {} end (roller)",
        summary.num_start_supports, summary.num_end_supports
    );
    println!(
        "Members:   {:.3} m total, shortest {:.3} m, longest {:.3} m",
        summary.total_length, summary.min_length, summary.max_length
    );

    println!("\nMembers per group:");
    for group in MemberGroup::ALL {
        println!("  {:<14} {}", group.to_string(), summary.group_count(group));
    }

    println!("\nStations across the deck:");
    for (i, z) in mesh.stations().iter().enumerate() {
        println!("  {}: z = {:.3} m", i, z);
    }

    // Locate a wheel load in its grid cell
    let (x, z) = (6.0, 3.0);
    if let Some(node) = mesh.nearest_node(x, z) {
        println!("\nNearest node to ({}, {}): {} at ({:.3}, {:.3})", x, z, node.tag, node.x, node.z);
    }

    let assignments = SectionAssignments::new()
        .with(
            SectionGroup::Longitudinal,
            MemberProperties::new(
                MemberSection::new(0.896, 0.358, 0.0125, 0.0417),
                Material::concrete(40e6),
            ),
        )
        .with(
            SectionGroup::EdgeBeam,
            MemberProperties::new(
                MemberSection::new(0.044625, 0.00032, 0.0001, 0.0002),
                Material::concrete(40e6),
            ),
        )
        .with(
            SectionGroup::Slab,
            MemberProperties::new(MemberSection::slab_strip(4.1, 0.2), Material::concrete(40e6)),
        )
        .with(
            SectionGroup::EdgeSlab,
            MemberProperties::new(MemberSection::slab_strip(2.05, 0.2), Material::concrete(40e6)),
        );
    let script = OpenSeesScript::new(&mesh, &assignments)
        .with_name("example_deck")
        .strict()
        .render()?;
    println!("\nScript: {} lines", script.lines().count());

    Ok(())
}
