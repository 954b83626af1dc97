// Container cards for the container manager grid

use super::{empty_state, escape};
use crate::models::{ActionKind, Container, ContainerStatus};

/// Badge CSS class for a status; unknown statuses get the "exited" look.
pub fn badge_class(status: &str) -> &'static str {
    match ContainerStatus::from_docker(status) {
        ContainerStatus::Running => "badge-running",
        ContainerStatus::Exited => "badge-exited",
        ContainerStatus::Created => "badge-created",
        ContainerStatus::Restarting => "badge-restarting",
        ContainerStatus::Removing => "badge-removing",
        ContainerStatus::Paused => "badge-paused",
        ContainerStatus::Dead => "badge-dead",
        ContainerStatus::Unknown => "badge-exited",
    }
}

/// Font Awesome icon for a status; unknown statuses get a question mark.
pub fn status_icon(status: &str) -> &'static str {
    match ContainerStatus::from_docker(status) {
        ContainerStatus::Running => "fa-play-circle",
        ContainerStatus::Exited => "fa-stop-circle",
        ContainerStatus::Created => "fa-plus-circle",
        ContainerStatus::Restarting => "fa-sync-alt",
        ContainerStatus::Removing => "fa-trash-alt",
        ContainerStatus::Paused => "fa-pause-circle",
        ContainerStatus::Dead => "fa-skull",
        ContainerStatus::Unknown => "fa-question-circle",
    }
}

pub fn empty_containers() -> String {
    empty_state(
        "fa-inbox",
        "No containers",
        "There are no containers on this node.",
        None,
    )
}

pub fn render_container_cards(containers: &[Container], node_id: &str) -> String {
    if containers.is_empty() {
        return empty_containers();
    }
    containers
        .iter()
        .enumerate()
        .map(|(index, c)| render_card(index, c, node_id))
        .collect()
}

fn render_card(index: usize, c: &Container, node_id: &str) -> String {
    let status = escape(&c.status);
    let ports = c
        .ports
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| {
            format!(
                r#"<div class="card-info"><i class="fas fa-network-wired"></i><span class="card-info-label">Ports:</span><span class="card-info-value">{}</span></div>"#,
                escape(p)
            )
        })
        .unwrap_or_default();
    let running = c.is_running();
    format!(
        concat!(
            r#"<div class="container-card {status_lower}" style="animation-delay: {delay:.2}s">"#,
            r#"<div class="card-header"><div><div class="card-title">{name}</div><div class="card-id">{id}</div></div>"#,
            r#"<span class="card-badge {badge}"><i class="fas {icon}"></i> {status}</span></div>"#,
            r#"<div class="card-body"><div class="card-info"><i class="fas fa-image"></i><span class="card-info-label">Image:</span><span class="card-info-value">{image}</span></div>{ports}</div>"#,
            r#"<div class="card-actions">{start}{stop}{restart}</div>"#,
            r#"</div>"#
        ),
        status_lower = escape(&c.status.to_lowercase()),
        delay = index as f64 * 0.05,
        name = escape(c.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Unnamed")),
        id = escape(&c.id),
        badge = badge_class(&c.status),
        icon = status_icon(&c.status),
        status = status,
        image = escape(c.image.as_deref().filter(|i| !i.is_empty()).unwrap_or("N/A")),
        ports = ports,
        start = action_button(ActionKind::Start, "fa-play", node_id, &c.id, running),
        stop = action_button(ActionKind::Stop, "fa-stop", node_id, &c.id, !running),
        restart = action_button(ActionKind::Restart, "fa-redo", node_id, &c.id, false),
    )
}

fn action_button(
    kind: ActionKind,
    icon: &str,
    node_id: &str,
    container_id: &str,
    disabled: bool,
) -> String {
    format!(
        r#"<button class="btn-action {kind}" data-action="container-{kind}" data-node-id="{node}" data-container-id="{container}"{disabled}><i class="fas {icon}"></i><span>{verb}</span></button>"#,
        kind = kind.as_str(),
        node = escape(node_id),
        container = escape(container_id),
        disabled = if disabled { " disabled" } else { "" },
        icon = icon,
        verb = kind.verb(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(id: &str, status: &str) -> Container {
        Container {
            id: id.into(),
            name: Some(format!("{}-name", id)),
            image: Some("nginx:latest".into()),
            status: status.into(),
            ports: None,
        }
    }

    fn button<'a>(html: &'a str, kind: &str) -> &'a str {
        let marker = format!(r#"data-action="container-{}""#, kind);
        let start = html.find(&marker).expect("button present");
        let end = html[start..].find('>').unwrap() + start;
        &html[start..end]
    }

    #[test]
    fn test_empty_list_renders_empty_state_without_actions() {
        let html = render_container_cards(&[], "main");
        assert!(html.contains("No containers"));
        assert!(!html.contains("btn-action"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_known_statuses_follow_lookup_table() {
        let table = [
            ("running", "badge-running", "fa-play-circle"),
            ("exited", "badge-exited", "fa-stop-circle"),
            ("created", "badge-created", "fa-plus-circle"),
            ("restarting", "badge-restarting", "fa-sync-alt"),
            ("removing", "badge-removing", "fa-trash-alt"),
            ("paused", "badge-paused", "fa-pause-circle"),
            ("dead", "badge-dead", "fa-skull"),
        ];
        for (status, badge, icon) in table {
            assert_eq!(badge_class(status), badge, "{}", status);
            assert_eq!(status_icon(status), icon, "{}", status);
            assert_eq!(badge_class(&status.to_uppercase()), badge);
            let html = render_container_cards(&[container("c1", status)], "main");
            assert!(html.contains(&format!("card-badge {}", badge)));
            assert!(html.contains(&format!("fas {}", icon)));
        }
    }

    #[test]
    fn test_unknown_status_falls_back() {
        for status in ["", "zombie", "Up 3 hours", "RUNNING!"] {
            assert_eq!(badge_class(status), "badge-exited");
            assert_eq!(status_icon(status), "fa-question-circle");
        }
    }

    #[test]
    fn test_start_disabled_only_when_running() {
        for status in ["running", "Running", "RUNNING"] {
            let html = render_container_cards(&[container("c1", status)], "main");
            assert!(button(&html, "start").ends_with(" disabled"));
            assert!(!button(&html, "stop").ends_with(" disabled"));
        }
        for status in ["exited", "paused", "weird"] {
            let html = render_container_cards(&[container("c1", status)], "main");
            assert!(!button(&html, "start").ends_with(" disabled"));
            assert!(button(&html, "stop").ends_with(" disabled"));
        }
        let html = render_container_cards(&[container("c1", "running")], "main");
        assert!(!button(&html, "restart").ends_with(" disabled"));
    }

    #[test]
    fn test_card_fallbacks_and_ports() {
        let mut c = container("abc", "exited");
        c.name = None;
        c.image = None;
        let html = render_container_cards(&[c.clone()], "n1");
        assert!(html.contains("Unnamed"));
        assert!(html.contains("N/A"));
        assert!(!html.contains("Ports:"));

        c.ports = Some("0.0.0.0:80->80/tcp".into());
        let html = render_container_cards(&[c], "n1");
        assert!(html.contains("Ports:"));
        assert!(html.contains("0.0.0.0:80-&gt;80/tcp"));
        assert!(html.contains(r#"data-node-id="n1""#));
    }

    #[test]
    fn test_one_card_per_container_with_staggered_delay() {
        let list = vec![container("a", "running"), container("b", "exited")];
        let html = render_container_cards(&list, "main");
        assert_eq!(html.matches(r#"<div class="container-card"#).count(), 2);
        assert!(html.contains("animation-delay: 0.00s"));
        assert!(html.contains("animation-delay: 0.05s"));
    }
}
