use xmlbuild::fixed::Element as Fixed;
use xmlbuild::{Document, Error, TextOptions, XmlData};

#[test]
fn test_accept_skips_subtree() {
    let mut data = XmlData::new();
    let root = (Fixed::new("a") / (Fixed::new("b") / "c" / "d") / (Fixed::new("e") / "f"))
        .build(&mut data)
        .unwrap();

    let mut seen = Vec::new();
    data.accept(root, |element| {
        seen.push(data.name(element).to_string());
        data.name(element) != "b"
    });
    assert_eq!(seen, vec!["a", "b", "e", "f"]);
}

#[test]
fn test_accept_does_not_visit_attributes() {
    let mut data = XmlData::new();
    let root = (Fixed::new("a").attribute("x", "1") / Fixed::new("b").attribute("y", "2"))
        .build(&mut data)
        .unwrap();
    let mut count = 0;
    data.accept(root, |_| {
        count += 1;
        true
    });
    assert_eq!(count, 2);
}

#[test]
fn test_accept_mut_sees_changes() {
    let mut data = XmlData::new();
    let root = (Fixed::new("a") / (Fixed::new("b") / "c"))
        .build(&mut data)
        .unwrap();

    let mut seen = Vec::new();
    data.accept_mut(root, |data, element| {
        seen.push(data.name(element).to_string());
        if data.name(element) == "b" {
            data.append_element(element, "z", "", &[])?;
        }
        Ok(true)
    })
    .unwrap();
    assert_eq!(seen, vec!["a", "b", "c", "z"]);
}

#[test]
fn test_accept_mut_error_aborts() {
    let mut data = XmlData::new();
    let mut doc = Document::new();
    let root = (Fixed::new("a") / "b" / Fixed::with_text("c", "leaf") / "d")
        .build(&mut data)
        .unwrap();
    doc.set_root_element(&mut data, root);

    let result = doc.accept_mut(&mut data, |data, element| {
        if !matches!(data.name(element), "a" | "x") {
            data.append_element(element, "x", "", &[])?;
        }
        Ok(true)
    });
    assert!(matches!(result, Err(Error::LeafHasText(name)) if name == "c"));
    // b was changed before the failure, d was never reached
    assert_eq!(
        data.to_text(root, &TextOptions::compact()),
        "<a><b><x/></b><c>leaf</c><d/></a>"
    );
}

#[test]
fn test_deep_tree() {
    let mut data = XmlData::new();
    let root = data.new_element("a").unwrap();
    let mut current = root;
    for _ in 0..10_000 {
        current = data.append_element(current, "a", "", &[]).unwrap();
    }

    let mut count = 0;
    data.accept(root, |_| {
        count += 1;
        true
    });
    assert_eq!(count, 10_001);

    let mut doc = Document::new();
    doc.set_root_element(&mut data, root);
    doc.rename_elements_by_name(&mut data, "a", "b").unwrap();
    assert_eq!(data.name(current), "b");
    assert_eq!(data.depth(current), 10_000);
}
