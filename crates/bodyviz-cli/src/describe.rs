// Imports
use crate::cli;
use bodyviz_shapes::{ShapeBehaviour, ShapeKind};
use std::path::PathBuf;

pub(crate) async fn run_describe(
    scene_files: &[PathBuf],
    kind: Option<ShapeKind>,
) -> anyhow::Result<()> {
    for scene_file in scene_files.iter() {
        let scene = cli::load_scene(scene_file).await?;
        println!("{}:", scene_file.display());
        for line in describe_lines(&scene, kind) {
            println!("  {line}");
        }
    }

    Ok(())
}

pub(crate) fn describe_lines(
    scene: &bodyviz_shapes::Scene,
    kind: Option<ShapeKind>,
) -> Vec<String> {
    scene
        .shapes
        .iter()
        .filter(|d| kind.map_or(true, |k| d.kind() == k))
        .map(|d| d.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyviz_shapes::Scene;

    #[test]
    fn test_describe_lines() {
        let scene = Scene::load_from_bytes(
            br#"{ "shapes": [
                { "name": "p1", "color": "red" },
                { "type": "Cube", "name": "b1", "color": "red", "length": 12 },
                { "type": "Cylinder", "name": "c1", "color": "blue", "length": 10, "radius": 5 }
            ] }"#,
        )
        .unwrap();

        assert_eq!(
            describe_lines(&scene, None),
            vec![
                "Shape p1 color:red",
                "Cube b1 color:red length: 12",
                "Cylinder c1 color:blue length: 10 radius: 5",
            ]
        );
        assert_eq!(
            describe_lines(&scene, Some(ShapeKind::Cube)),
            vec!["Cube b1 color:red length: 12"]
        );
    }
}
