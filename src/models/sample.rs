use super::Employee;

/// The reference chart used by the CLI when no `--chart` is given.
///
/// ```text
/// 1 Mark Zuckerberg
/// ├── 2 Sarah Donald
/// │   └── 3 Cassandra Reynolds
/// │       ├── 4 Mary Blue
/// │       └── 5 Bob Saget
/// │           └── 6 Tina Teff
/// │               └── 7 Will Turner
/// ├── 10 Tyler Simpson
/// ├── 11 Bruce Willis
/// └── 12 Georgina Flangy
///     └── 13 Sophie Turner
/// ```
pub fn sample_chart() -> Employee {
    let bob = Employee::new(5, "Bob Saget").with_subordinates(vec![Employee::new(6, "Tina Teff")
        .with_subordinates(vec![Employee::new(7, "Will Turner")])]);

    let cassandra = Employee::new(3, "Cassandra Reynolds")
        .with_subordinates(vec![Employee::new(4, "Mary Blue"), bob]);

    Employee::new(1, "Mark Zuckerberg").with_subordinates(vec![
        Employee::new(2, "Sarah Donald").with_subordinates(vec![cassandra]),
        Employee::new(10, "Tyler Simpson"),
        Employee::new(11, "Bruce Willis"),
        Employee::new(12, "Georgina Flangy")
            .with_subordinates(vec![Employee::new(13, "Sophie Turner")]),
    ])
}
