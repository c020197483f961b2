use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn endpoints_wrap_control_points() {
    let path = [p(0.0, 0.0), p(100.0, 0.0)];
    let controls = [p(20.0, 50.0), p(80.0, 50.0)];
    let set = ControlPointSet::with_endpoints(&path, &controls);
    assert_eq!(
        set.as_slice(),
        &[p(0.0, 0.0), p(20.0, 50.0), p(80.0, 50.0), p(100.0, 0.0)]
    );
}

#[test]
fn endpoints_alone_without_controls() {
    let path = [p(0.0, 0.0), p(100.0, 0.0)];
    let set = ControlPointSet::with_endpoints(&path, &[]);
    assert_eq!(set.as_slice(), &path);

    let half = ControlPointSet::with_endpoints(&path[..1], &[]);
    assert_eq!(half.len(), 1);
    assert!(!half.is_drawable());
}

#[test]
fn parses_point_lists() {
    let set: ControlPointSet = "0,0  10,10\n20.5,-3".parse().unwrap();
    assert_eq!(
        set.as_slice(),
        &[p(0.0, 0.0), p(10.0, 10.0), p(20.5, -3.0)]
    );

    let empty: ControlPointSet = "   ".parse().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn rejects_malformed_points() {
    assert!(matches!(
        "1,2 3".parse::<ControlPointSet>(),
        Err(BezierError::Validation(_))
    ));
    assert!(parse_point("a,1").is_err());
    assert!(parse_point("1,inf").is_err());
    assert_eq!(parse_point(" 1.5 , 2 ").unwrap(), p(1.5, 2.0));
}

#[test]
fn push_and_clear() {
    let mut set = ControlPointSet::new();
    set.push(p(1.0, 1.0));
    set.push(p(2.0, 2.0));
    assert!(set.is_drawable());
    set.clear();
    assert!(set.is_empty());
}
