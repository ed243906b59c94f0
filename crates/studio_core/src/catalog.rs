//! Static catalog of loadable Menagerie scenes.

/// Scene loaded when the studio starts.
pub const DEFAULT_RESOURCE_PATH: &str = "/mujoco/menagerie/unitree_g1/scene.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub display_name: &'static str,
    pub resource_path: &'static str,
    pub icon: &'static str,
}

impl CatalogEntry {
    const fn new(display_name: &'static str, resource_path: &'static str, icon: &'static str) -> Self {
        Self {
            display_name,
            resource_path,
            icon,
        }
    }

    /// Last two segments of the resource path, e.g. `unitree_h1/scene.xml`.
    pub fn short_path(&self) -> String {
        short_path(self.resource_path)
    }
}

pub static MENAGERIE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry::new("Unitree G1", "/mujoco/menagerie/unitree_g1/scene.xml", "🤖"),
    CatalogEntry::new("Unitree H1", "/mujoco/menagerie/unitree_h1/scene.xml", "🧍"),
    CatalogEntry::new(
        "Boston Dynamics Spot",
        "/mujoco/menagerie/boston_dynamics_spot/scene.xml",
        "🐕",
    ),
    CatalogEntry::new("Agility Cassie", "/mujoco/menagerie/agility_cassie/scene.xml", "🦵"),
    CatalogEntry::new(
        "Anybotics ANYmal C",
        "/mujoco/menagerie/anybotics_anymal_c/scene.xml",
        "🐂",
    ),
    CatalogEntry::new(
        "Franka Emika Panda",
        "/mujoco/menagerie/franka_emika_panda/scene.xml",
        "🦾",
    ),
    CatalogEntry::new(
        "Universal Robots UR5e",
        "/mujoco/menagerie/universal_robots_ur5e/scene.xml",
        "🏗️",
    ),
    CatalogEntry::new("Shadow Hand", "/mujoco/menagerie/shadow_hand/left_hand.xml", "🖐️"),
    CatalogEntry::new("Aloha", "/mujoco/menagerie/aloha/scene.xml", "🦀"),
    CatalogEntry::new("Fly Body", "/mujoco/menagerie/flybody/scene.xml", "🪰"),
    CatalogEntry::new(
        "Bitcraze Crazyflie 2",
        "/mujoco/menagerie/bitcraze_crazyflie_2/scene.xml",
        "🚁",
    ),
];

pub fn find(resource_path: &str) -> Option<&'static CatalogEntry> {
    MENAGERIE_CATALOG
        .iter()
        .find(|entry| entry.resource_path == resource_path)
}

/// Display name for a path, falling back to the short path for paths that are
/// not in the catalog.
pub fn display_name(resource_path: &str) -> String {
    match find(resource_path) {
        Some(entry) => entry.display_name.to_string(),
        None => short_path(resource_path),
    }
}

pub fn short_path(resource_path: &str) -> String {
    let segments: Vec<&str> = resource_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    let start = segments.len().saturating_sub(2);
    segments[start..].join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resource_paths_are_unique() {
        let paths: HashSet<&str> = MENAGERIE_CATALOG
            .iter()
            .map(|entry| entry.resource_path)
            .collect();
        assert_eq!(paths.len(), MENAGERIE_CATALOG.len());
    }

    #[test]
    fn default_path_is_in_catalog() {
        let entry = find(DEFAULT_RESOURCE_PATH).expect("default scene should be listed");
        assert_eq!(entry.display_name, "Unitree G1");
    }

    #[test]
    fn short_path_keeps_last_two_segments() {
        assert_eq!(
            short_path("/mujoco/menagerie/shadow_hand/left_hand.xml"),
            "shadow_hand/left_hand.xml"
        );
        assert_eq!(short_path("scene.xml"), "scene.xml");
        assert_eq!(short_path(""), "");
    }

    #[test]
    fn display_name_falls_back_to_short_path() {
        assert_eq!(
            display_name("/mujoco/menagerie/unitree_h1/scene.xml"),
            "Unitree H1"
        );
        assert_eq!(display_name("/custom/robots/arm.xml"), "robots/arm.xml");
    }
}
