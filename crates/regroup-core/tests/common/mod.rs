use regroup_core::Structure;

/// Build a `Structure<char>` from slice literals, e.g. `structure(&[&['A'], &[]])`
#[allow(dead_code)]
pub fn structure(groups: &[&[char]]) -> Structure<char> {
    groups.iter().map(|g| g.to_vec()).collect()
}

/// The `[[A,B],[],[C,D,E]]` fixture used across scenario tests
#[allow(dead_code)]
pub fn abcde() -> Structure<char> {
    structure(&[&['A', 'B'], &[], &['C', 'D', 'E']])
}

/// Group lengths, in order
#[allow(dead_code)]
pub fn shape<T>(s: &Structure<T>) -> Vec<usize> {
    s.groups().iter().map(Vec::len).collect()
}
