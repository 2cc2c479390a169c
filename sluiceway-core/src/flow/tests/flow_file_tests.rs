use crate::flow::{ATTR_FLOW_SIZE, Attributes, FlowFile};

#[test]
fn new_flow_file_records_its_size() {
    // Arrange / Act
    let flow = FlowFile::new(b"hello world".as_slice());

    // Assert
    assert_eq!(flow.size(), 11);
    assert_eq!(flow.attributes.get(ATTR_FLOW_SIZE).unwrap(), "11");
}

#[test]
fn replace_content_updates_size_attribute() {
    // Arrange
    let mut flow = FlowFile::new(b"hello world".as_slice());
    let id = flow.id.clone();

    // Act
    flow.replace_content(b"hi".as_slice());

    // Assert
    assert_eq!(flow.attributes.get(ATTR_FLOW_SIZE).unwrap(), "2");
    assert_eq!(flow.id, id);
}

#[test]
fn caller_attributes_are_preserved() {
    // Arrange
    let mut attrs = Attributes::new();
    attrs.insert("numBytes".to_owned(), "12 B".to_owned());

    // Act
    let flow = FlowFile::with_attributes(b"abc".as_slice(), attrs);

    // Assert
    assert_eq!(flow.attributes.get("numBytes").unwrap(), "12 B");
    assert_eq!(flow.attributes.get(ATTR_FLOW_SIZE).unwrap(), "3");
}

#[test]
fn empty_content_is_a_valid_flow_file() {
    let flow = FlowFile::new(Vec::new());

    assert_eq!(flow.size(), 0);
    assert_eq!(flow.attributes.get(ATTR_FLOW_SIZE).unwrap(), "0");
}
