use keydiff_core::{Node, RenderConfig, Report};

#[test]
fn keydiff_core_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let en = Node::from_json_str("{\"title\":\"Hello\",\"menu\":{\"open\":\"Open\"}}")?;
    let ar = Node::from_yaml_str("title: مرحبا\n")?;

    let diff = en.diff(&ar);
    assert_eq!(diff.missing_strings(), ["menu"]);

    let rendered = Report::compare(&en, &ar).render(&RenderConfig::default());
    println!("{rendered}");
    assert!(rendered.contains("Missing translations: 1"));
    Ok(())
}
