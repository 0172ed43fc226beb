use xmlbuild::fixed::Element as Fixed;
use xmlbuild::{Element, XmlData};

fn plano(data: &mut XmlData) -> Element {
    (Fixed::new("plano")
        / Fixed::with_text("curso", "MEI")
        / (Fixed::new("fuc").attribute("codigo", "M4310")
            / Fixed::with_text("nome", "PA")
            / (Fixed::new("avaliacao")
                / Fixed::new("componente").attribute("nome", "Quizzes"))))
    .build(data)
    .unwrap()
}

#[test]
fn test_children_skip_attributes() {
    let mut data = XmlData::new();
    let plano = plano(&mut data);
    let children = data.children(plano).collect::<Vec<_>>();
    assert_eq!(children.len(), 2);
    let fuc = children[1];
    assert_eq!(data.name(fuc), "fuc");
    assert_eq!(
        data.children(fuc).map(|c| data.name(c)).collect::<Vec<_>>(),
        vec!["nome", "avaliacao"]
    );
    assert_eq!(
        data.reverse_children(fuc)
            .map(|c| data.name(c))
            .collect::<Vec<_>>(),
        vec!["avaliacao", "nome"]
    );
    assert_eq!(data.child_index(fuc, children[0]), None);
    assert_eq!(data.child_index(plano, fuc), Some(1));
}

#[test]
fn test_text() {
    let mut data = XmlData::new();
    let plano = plano(&mut data);
    let curso = data.children(plano).next().unwrap();
    assert_eq!(data.text(curso), "MEI");
    assert_eq!(data.text(plano), "");
    assert!(!data.has_children(curso));
    assert!(data.has_children(plano));
}

#[test]
fn test_path_and_depth() {
    let mut data = XmlData::new();
    let plano = plano(&mut data);
    let paths = data
        .descendants(plano)
        .map(|e| (data.path(e), data.depth(e)))
        .collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec![
            ("plano".to_string(), 0),
            ("plano/curso".to_string(), 1),
            ("plano/fuc".to_string(), 1),
            ("plano/fuc/nome".to_string(), 2),
            ("plano/fuc/avaliacao".to_string(), 2),
            ("plano/fuc/avaliacao/componente".to_string(), 3),
        ]
    );
}

#[test]
fn test_path_follows_moves() {
    let mut data = XmlData::new();
    let plano = plano(&mut data);
    let componente = data
        .descendants(plano)
        .find(|e| data.name(*e) == "componente")
        .unwrap();
    data.append(plano, componente).unwrap();
    assert_eq!(data.path(componente), "plano/componente");
    data.detach(componente);
    assert_eq!(data.path(componente), "componente");
    assert_eq!(data.parent(componente), None);
}

#[test]
fn test_ancestors() {
    let mut data = XmlData::new();
    let plano = plano(&mut data);
    let nome = data
        .descendants(plano)
        .find(|e| data.name(*e) == "nome")
        .unwrap();
    assert_eq!(
        data.ancestors(nome).map(|e| data.name(e)).collect::<Vec<_>>(),
        vec!["nome", "fuc", "plano"]
    );
}

#[test]
fn test_attributes_view() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.add_attribute(fuc, "nome", "PA").unwrap();

    let attributes = data.attributes(fuc);
    assert_eq!(attributes.len(), 2);
    assert!(!attributes.is_empty());
    assert!(attributes.contains_key("nome"));
    assert!(!attributes.contains_key("peso"));
    assert_eq!(attributes.get("codigo"), Some("M4310"));
    assert_eq!(attributes.values().collect::<Vec<_>>(), vec!["M4310", "PA"]);
    assert_eq!(
        attributes.to_vec(),
        vec![
            ("codigo".to_string(), "M4310".to_string()),
            ("nome".to_string(), "PA".to_string())
        ]
    );

    let node = attributes.get_node("nome").unwrap();
    assert_eq!(data.owner(node), Some(fuc));
    assert_eq!(data.attribute_name(node), "nome");
    assert_eq!(data.attribute_value(node), "PA");
    assert_eq!(data.get_attribute(fuc, "peso"), None);
}

#[test]
fn test_debug_output() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    data.add_attribute(fuc, "codigo", "M4310").unwrap();
    let debug = format!("{:?}", data.attributes(fuc));
    assert!(debug.starts_with("Attributes"));
    assert!(debug.contains("M4310"));
}

#[test]
fn test_attributes_empty() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    data.append_element(fuc, "nome", "PA", &[]).unwrap();
    let attributes = data.attributes(fuc);
    assert!(attributes.is_empty());
    assert_eq!(attributes.len(), 0);
    assert_eq!(attributes.iter().count(), 0);
}

#[test]
fn test_handles_are_identities() {
    let mut data = XmlData::new();
    let a = data.new_element("fuc").unwrap();
    let b = data.new_element("fuc").unwrap();
    assert_ne!(a, b);
    assert_eq!(a, a);
}
