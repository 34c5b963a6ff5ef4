use pretty_assertions::assert_eq;
use shared_types::{active_link, nav_links, Role, ALL_ROLES, ROLE_NAVIGATION};
use std::collections::HashSet;

#[test]
fn test_every_role_has_exactly_one_link_set() {
    for role in ALL_ROLES {
        let count = ROLE_NAVIGATION.iter().filter(|(r, _)| r == role).count();
        assert_eq!(count, 1, "{role}");
    }
}

#[test]
fn test_links_stay_inside_the_roles_portal() {
    for role in ALL_ROLES {
        for link in nav_links(*role) {
            assert!(link.path.starts_with(role.portal_prefix()), "{}", link.path);
        }
    }
}

#[test]
fn test_first_link_is_the_role_home() {
    for role in ALL_ROLES {
        assert_eq!(nav_links(*role)[0].path, role.home_path());
    }
}

#[test]
fn test_no_path_is_shared_between_roles() {
    let mut seen = HashSet::new();
    for role in ALL_ROLES {
        for link in nav_links(*role) {
            assert!(seen.insert(link.path), "{} listed twice", link.path);
        }
    }
}

#[test]
fn test_active_link_follows_current_path() {
    let link = active_link(Role::Employee, "/employee-portal/schedule").unwrap();
    assert_eq!(link.label, "Schedule");
    assert!(active_link(Role::Employee, "/admin-portal/staff").is_none());
}

#[test]
fn test_role_names_round_trip_through_parse() {
    for role in ALL_ROLES {
        assert_eq!(Role::parse_role(role.as_str()), Some(*role));
    }
    assert_eq!(Role::parse_role("superuser"), None);
}
