use xmlbuild::{Error, TextOptions, XmlData};

fn compact(data: &XmlData, element: xmlbuild::Element) -> String {
    data.to_text(element, &TextOptions::compact())
}

#[test]
fn test_append_and_remove_restores_children() {
    let mut data = XmlData::new();
    let plano = data.new_element("plano").unwrap();
    data.append_element(plano, "curso", "MEI", &[]).unwrap();
    let before = data.children(plano).collect::<Vec<_>>();

    let fuc = data.new_element("fuc").unwrap();
    data.append(plano, fuc).unwrap();
    assert_eq!(data.parent(fuc), Some(plano));
    data.remove_child(plano, fuc);

    assert_eq!(data.children(plano).collect::<Vec<_>>(), before);
    assert_eq!(data.parent(fuc), None);
}

#[test]
fn test_append_moves_element() {
    let mut data = XmlData::new();
    let a = data.new_element("a").unwrap();
    let b = data.new_element("b").unwrap();
    let c = data.append_element(a, "c", "", &[]).unwrap();

    data.append(b, c).unwrap();
    assert_eq!(data.parent(c), Some(b));
    assert_eq!(data.children(a).count(), 0);
    assert_eq!(compact(&data, a), "<a/>");
    assert_eq!(compact(&data, b), "<b><c/></b>");
}

#[test]
fn test_append_all_in_order() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    let nome = data.new_text_element("nome", "PA").unwrap();
    let ects = data.new_text_element("ects", "6.0").unwrap();
    data.append_all(fuc, &[nome, ects]).unwrap();
    assert_eq!(
        compact(&data, fuc),
        "<fuc><nome>PA</nome><ects>6.0</ects></fuc>"
    );
}

#[test]
fn test_append_ancestor_fails() {
    let mut data = XmlData::new();
    let a = data.new_element("a").unwrap();
    let b = data.append_element(a, "b", "", &[]).unwrap();
    assert!(matches!(data.append(b, a), Err(Error::Tree(_))));
    assert!(matches!(data.append(a, a), Err(Error::Tree(_))));
    assert_eq!(data.parent(b), Some(a));
}

#[test]
fn test_leaf_with_text_cannot_have_children() {
    let mut data = XmlData::new();
    let curso = data.new_text_element("curso", "MEI").unwrap();
    let fuc = data.new_element("fuc").unwrap();
    assert!(matches!(data.append(curso, fuc), Err(Error::LeafHasText(_))));
    assert!(matches!(
        data.append_element(curso, "fuc", "", &[]),
        Err(Error::LeafHasText(_))
    ));
    assert_eq!(data.children(curso).count(), 0);
    assert_eq!(data.parent(fuc), None);
}

#[test]
fn test_container_cannot_get_text() {
    let mut data = XmlData::new();
    let plano = data.new_element("plano").unwrap();
    data.append_element(plano, "curso", "", &[]).unwrap();
    assert!(matches!(
        data.set_text(plano, "MEI"),
        Err(Error::HasChildren(_))
    ));
    assert_eq!(data.text(plano), "");
    // blank text is always allowed
    data.set_text(plano, "  ").unwrap();
}

#[test]
fn test_whitespace_text_allows_children() {
    let mut data = XmlData::new();
    let plano = data.new_text_element("plano", " \n").unwrap();
    data.append_element(plano, "curso", "MEI", &[]).unwrap();
    assert!(data.has_children(plano));
}

#[test]
fn test_invalid_names() {
    let mut data = XmlData::new();
    assert!(matches!(data.new_element("Plano"), Err(Error::InvalidName(_))));
    assert!(matches!(data.new_element(""), Err(Error::InvalidName(_))));
    let fuc = data.new_element("fuc").unwrap();
    assert!(matches!(
        data.set_name(fuc, "fuc2"),
        Err(Error::InvalidName(_))
    ));
    assert_eq!(data.name(fuc), "fuc");
    assert!(matches!(
        data.add_attribute(fuc, "Codigo", "M4310"),
        Err(Error::InvalidName(_))
    ));
}

#[test]
fn test_blank_attribute_value() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    assert!(matches!(
        data.add_attribute(fuc, "codigo", " "),
        Err(Error::EmptyValue(name)) if name == "codigo"
    ));
    assert!(matches!(
        data.new_attribute("codigo", ""),
        Err(Error::EmptyValue(_))
    ));
    let codigo = data.add_attribute(fuc, "codigo", "M4310").unwrap();
    assert!(matches!(
        data.set_attribute_value(codigo, "\t"),
        Err(Error::EmptyValue(_))
    ));
    assert_eq!(data.attribute_value(codigo), "M4310");
}

#[test]
fn test_duplicate_attribute_leaves_element_unchanged() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.add_attribute(fuc, "nome", "PA").unwrap();
    let before = data.attributes(fuc).to_vec();

    assert!(matches!(
        data.add_attribute(fuc, "codigo", "A4545"),
        Err(Error::DuplicateAttribute(_))
    ));
    let other = data.new_attribute("nome", "X").unwrap();
    assert!(matches!(
        data.append_attribute(fuc, other),
        Err(Error::DuplicateAttribute(_))
    ));
    assert_eq!(data.attributes(fuc).to_vec(), before);
    assert_eq!(data.owner(other), None);
}

#[test]
fn test_create_element_with_duplicate_attributes() {
    let mut data = XmlData::new();
    let plano = data.new_element("plano").unwrap();
    let a = data.new_attribute("codigo", "A").unwrap();
    let b = data.new_attribute("codigo", "B").unwrap();
    assert!(matches!(
        data.create_element(Some(plano), "fuc", "", &[a, b]),
        Err(Error::DuplicateAttribute(_))
    ));
    assert_eq!(data.children(plano).count(), 0);
    assert_eq!(data.owner(a), None);
}

#[test]
fn test_attribute_order_is_insertion_order() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    data.append_element(fuc, "nome", "PA", &[]).unwrap();
    data.add_attribute(fuc, "peso", "20%").unwrap();
    data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.add_attribute(fuc, "nome", "PA").unwrap();
    assert_eq!(
        data.attributes(fuc).keys().collect::<Vec<_>>(),
        vec!["peso", "codigo", "nome"]
    );
    assert_eq!(
        compact(&data, fuc),
        r#"<fuc peso="20%" codigo="M4310" nome="PA"><nome>PA</nome></fuc>"#
    );
}

#[test]
fn test_attribute_owner_reassignment() {
    let mut data = XmlData::new();
    let a = data.new_element("a").unwrap();
    let b = data.new_element("b").unwrap();
    let codigo = data.add_attribute(a, "codigo", "M4310").unwrap();

    data.set_attribute_owner(codigo, Some(b)).unwrap();
    assert_eq!(data.owner(codigo), Some(b));
    assert!(data.attributes(a).is_empty());
    assert_eq!(data.get_attribute(b, "codigo"), Some("M4310"));

    // already owned: nothing changes
    data.append_attribute(b, codigo).unwrap();
    assert_eq!(data.attributes(b).len(), 1);

    data.set_attribute_owner(codigo, None).unwrap();
    assert_eq!(data.owner(codigo), None);
    assert!(data.attributes(b).is_empty());
}

#[test]
fn test_remove_attribute() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    let codigo = data.add_attribute(fuc, "codigo", "M4310").unwrap();
    let nome = data.add_attribute(fuc, "nome", "PA").unwrap();

    data.remove_attribute(fuc, "codigo").unwrap();
    assert_eq!(data.owner(codigo), None);
    assert_eq!(data.attributes(fuc).keys().collect::<Vec<_>>(), vec!["nome"]);

    // not present: no-op
    data.remove_attribute(fuc, "peso").unwrap();
    assert!(matches!(
        data.remove_attribute(fuc, "Peso"),
        Err(Error::InvalidName(_))
    ));

    let other = data.new_element("other").unwrap();
    data.remove_attribute_node(other, nome);
    assert_eq!(data.owner(nome), Some(fuc));
    data.remove_attribute_node(fuc, nome);
    assert!(data.attributes(fuc).is_empty());
}

#[test]
fn test_change_attribute() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.change_attribute(fuc, "codigo", "A4545").unwrap();
    assert_eq!(data.get_attribute(fuc, "codigo"), Some("A4545"));

    // absent attribute: nothing is added
    data.change_attribute(fuc, "peso", "20%").unwrap();
    assert_eq!(data.attributes(fuc).len(), 1);
    assert!(matches!(
        data.change_attribute(fuc, "codigo", ""),
        Err(Error::EmptyValue(_))
    ));
}

#[test]
fn test_rename_attribute() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    let codigo = data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.add_attribute(fuc, "nome", "PA").unwrap();

    assert!(matches!(
        data.set_attribute_name(codigo, "nome"),
        Err(Error::DuplicateAttribute(_))
    ));
    assert_eq!(data.attribute_name(codigo), "codigo");

    // renaming to its own name is not a clash
    data.set_attribute_name(codigo, "codigo").unwrap();
    data.set_attribute_name(codigo, "code").unwrap();
    assert_eq!(
        data.attributes(fuc).keys().collect::<Vec<_>>(),
        vec!["code", "nome"]
    );

    let loose = data.new_attribute("peso", "20%").unwrap();
    data.set_attribute_name(loose, "nome").unwrap();
    assert_eq!(data.attribute_name(loose), "nome");
}

#[test]
fn test_remove_children_by_name() {
    let mut data = XmlData::new();
    let plano = data.new_element("plano").unwrap();
    let curso = data.append_element(plano, "curso", "MEI", &[]).unwrap();
    let a = data.append_element(plano, "fuc", "", &[]).unwrap();
    data.add_attribute(a, "codigo", "A").unwrap();
    data.append_element(plano, "fuc", "", &[]).unwrap();

    data.remove_children_by_name(plano, "fuc", &[]).unwrap();
    assert_eq!(data.children(plano).collect::<Vec<_>>(), vec![curso]);
    assert_eq!(data.parent(a), None);
}

#[test]
fn test_free_releases_subtree() {
    let mut data = XmlData::new();
    let plano = data.new_element("plano").unwrap();
    let fuc = data.append_element(plano, "fuc", "", &[]).unwrap();
    data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.append_element(fuc, "nome", "PA", &[]).unwrap();
    assert_eq!(data.node_count(), 4);

    data.free(fuc);
    assert_eq!(data.node_count(), 1);
    assert!(!data.has_children(plano));
    // a second release is a no-op
    data.free(fuc);
    assert_eq!(data.node_count(), 1);
}

#[test]
fn test_free_attribute() {
    let mut data = XmlData::new();
    let fuc = data.new_element("fuc").unwrap();
    let codigo = data.add_attribute(fuc, "codigo", "M4310").unwrap();
    data.add_attribute(fuc, "nome", "PA").unwrap();

    data.free_attribute(codigo);
    assert_eq!(data.node_count(), 2);
    assert_eq!(data.attributes(fuc).keys().collect::<Vec<_>>(), vec!["nome"]);
}

#[test]
fn test_repeated_free_keeps_count() {
    let mut data = XmlData::new();
    let plano = data.new_element("plano").unwrap();
    for _ in 0..1000 {
        let fuc = data.append_element(plano, "fuc", "", &[]).unwrap();
        data.add_attribute(fuc, "codigo", "M4310").unwrap();
        data.free(fuc);
    }
    assert_eq!(data.node_count(), 1);
}
