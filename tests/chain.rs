use linkchain::{Chain, ChainError, Node, RenderOptions};

#[test]
fn three_node_chain() {
    let mut chain = Chain::new();
    let a = chain.insert("x");
    let b = chain.insert("y");
    let c = chain.insert("z");
    chain.set_next(a, Some(b)).unwrap();
    chain.set_next(b, Some(c)).unwrap();

    assert_eq!(chain.render(a).unwrap(), "x; y; z");

    let head: &Node<&str> = chain.get(a).unwrap();
    assert_eq!(*head.value(), "x");
    assert_eq!(head.next(), Some(b));
}

#[test]
fn relinked_cycle_is_an_error_not_a_hang() {
    let mut chain = Chain::default();
    let a = chain.insert(1);
    let b = chain.insert(2);
    chain.set_next(a, Some(b)).unwrap();
    chain.set_next(b, Some(a)).unwrap();

    let err = chain.render(a).unwrap_err();
    assert_eq!(err, ChainError::Cycle { at: a });
    assert_eq!(err.to_string(), format!("cycle detected at node {}", a.as_raw()));

    // breaking the loop makes the chain renderable again
    chain.set_next(b, None).unwrap();
    assert_eq!(chain.render(a).unwrap(), "1; 2");
}

#[test]
fn depth_limit_message() {
    let mut chain = Chain::new();
    let a = chain.insert('a');
    let b = chain.insert('b');
    chain.set_next(a, Some(b)).unwrap();

    let err = chain
        .render_with(a, &RenderOptions::default().with_max_depth(1))
        .unwrap_err();
    assert_eq!(err.to_string(), "render depth limit of 1 nodes exceeded");
}

#[test]
fn handles_do_not_cross_chains() {
    let mut left = Chain::new();
    let l0 = left.insert("l0");
    let l1 = left.insert("l1");
    left.set_next(l0, Some(l1)).unwrap();

    let mut right = Chain::new();
    let _r0 = right.insert("r0");
    let r1 = right.insert("r1");

    let err = left.set_next(l0, Some(r1)).unwrap_err();
    assert_eq!(err, ChainError::InvalidHandle(r1));
    assert_eq!(left.render(l0).unwrap(), "l0; l1");
    assert!(right.value(l1).is_err());
}
