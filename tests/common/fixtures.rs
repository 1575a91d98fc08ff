//! Test fixtures - reusable menus.toml and treenav.toml contents.

/// Two-level site menu with literal URLs only (the walkthrough shape:
/// Home -> About -> Team, plus Contact under Home).
pub const MENUS_SITE: &str = r#"
[[menu]]
name = "Site"
slug = "site"

[[menu.item]]
id = 1
title = "Home"
url = "/"

[[menu.item]]
id = 2
parent_id = 1
title = "About"
url = "/about/"

[[menu.item]]
id = 3
parent_id = 2
title = "Team"
url = "/about/team/"

[[menu.item]]
id = 4
parent_id = 1
title = "Contact"
url = "/contact/"
order = 1
"#;

/// A menu with a duplicated item id (structural failure)
pub const MENUS_DUPLICATE_ID: &str = r#"
[[menu]]
name = "Broken"
slug = "broken"

[[menu.item]]
id = 1
title = "One"
url = "/one/"

[[menu.item]]
id = 1
title = "Two"
url = "/two/"
"#;

/// A menu whose parent chain loops (structural failure)
pub const MENUS_CYCLE: &str = r#"
[[menu]]
name = "Loop"
slug = "loop"

[[menu.item]]
id = 1
parent_id = 2
title = "A"
url = "/a/"

[[menu.item]]
id = 2
parent_id = 1
title = "B"
url = "/b/"
"#;

/// A menu with one item pointing at a parent outside the set
pub const MENUS_DANGLING_PARENT: &str = r#"
[[menu]]
name = "Tolerant"
slug = "tolerant"

[[menu.item]]
id = 1
title = "Home"
url = "/"

[[menu.item]]
id = 2
parent_id = 99
title = "Orphan"
url = "/orphan/"
"#;

/// A menu mixing named routes and literal URLs
pub const MENUS_ROUTED: &str = r#"
[[menu]]
name = "Routed"
slug = "routed"

[[menu.item]]
id = 1
title = "Home"
named_route = "home"
url = "/stale-home/"

[[menu.item]]
id = 2
parent_id = 1
title = "Pricing"
named_route = "missing-route"
url = "/pricing/"

[[menu.item]]
id = 3
parent_id = 1
title = "Dead end"
order = 1
"#;

/// Project config with a small route table
pub const CONFIG_WITH_ROUTES: &str = r#"
[menus]
path = "menus.toml"

[routes]
home = "/"
about = "/about/"
"#;
