// Imports
use bodyviz_shapes::validate;
use bodyviz_shapes::NamedColors;

pub(crate) fn run_color(names: &[String]) -> anyhow::Result<()> {
    for line in color_lines(names)? {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn color_lines(names: &[String]) -> anyhow::Result<Vec<String>> {
    names
        .iter()
        .map(|name| -> anyhow::Result<String> {
            let color = validate::resolve_color(&NamedColors, name)?;
            Ok(format!("{name}: {color}"))
        })
        .collect()
}
