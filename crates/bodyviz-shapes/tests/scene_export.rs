use approx::assert_relative_eq;
use bodyviz_shapes::{
    Color, ColorLookup, ColorLookupError, Cube, Cylinder, Descriptor, NamedColors, Scene, Shape,
    ShapeBehaviour, ShapeKind,
};
use serde_json::{json, Value};

#[test]
fn exported_mappings() {
    let grey = NamedColors.lookup("grey").unwrap();
    assert_relative_eq!(grey.r, 0.5019607843137255);

    let scene = Scene {
        shapes: vec![
            Shape::default().into(),
            Cube::new("b1", "red", 12.0).unwrap().into(),
            Cylinder::new("c1", "blue", 10.0, 5.0).unwrap().into(),
        ],
    };
    let exported: Value = serde_json::from_slice(&scene.export_to_bytes().unwrap()).unwrap();

    assert_eq!(
        exported,
        json!({
            "shapes": [
                { "name": "UnNamed", "color": [grey.r, grey.g, grey.b], "type": "Shape" },
                { "name": "b1", "color": [1.0, 0.0, 0.0], "type": "Cube", "length": 12.0 },
                {
                    "name": "c1",
                    "color": [0.0, 0.0, 1.0],
                    "type": "Cylinder",
                    "length": 10.0,
                    "radius": 5.0
                },
            ]
        })
    );
}

#[test]
fn load_mutate_export() {
    let document = json!({
        "shapes": [
            { "type": "Cube", "name": "link1", "color": "#ff8800", "length": 0.5 },
            { "type": "Cylinder", "name": "link2" },
        ]
    });
    let mut scene =
        Scene::load_from_bytes(serde_json::to_vec(&document).unwrap().as_slice()).unwrap();

    for shape in scene.shapes.iter_mut() {
        shape.set_color("r").unwrap();
    }
    if let Descriptor::Cylinder(cylinder) = &mut scene.shapes[1] {
        cylinder.set_radius(0.1).unwrap();
    }

    assert!(scene.shapes.iter().all(|s| s.color_rgb() == Color::RED));
    assert_eq!(scene.shapes_of_kind(ShapeKind::Cube).count(), 1);
    assert_eq!(
        scene.shapes[1].to_data_map().get("radius"),
        Some(&json!(0.1))
    );
}

#[test]
fn custom_lookup_scene() {
    let lookup = |name: &str| match name {
        "body" => Ok(Color::new(0.3, 0.3, 0.9)),
        _ => Err(ColorLookupError::UnknownColor(name.to_string())),
    };

    let scene = Scene::load_from_bytes_w_lookup(
        br#"{ "shapes": [{ "color": "body" }] }"#,
        &lookup,
    )
    .unwrap();
    assert!(scene.shapes[0]
        .color_rgb()
        .approx_eq(Color::new(0.3, 0.3, 0.9)));

    assert!(Scene::load_from_bytes_w_lookup(br#"{ "shapes": [{}] }"#, &lookup).is_err());
}
