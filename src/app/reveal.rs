use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Initial visual state a block resolves out of when it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    /// Transparent only.
    #[default]
    Fade,
    /// Transparent, offset 40px down.
    Rise,
    /// Transparent, offset 20px down.
    Lift,
    /// Transparent, scaled down slightly.
    Grow,
}

impl Entrance {
    fn hidden_classes(self) -> &'static str {
        match self {
            Entrance::Fade => "opacity-0",
            Entrance::Rise => "opacity-0 translate-y-10",
            Entrance::Lift => "opacity-0 translate-y-5",
            Entrance::Grow => "opacity-0 scale-90",
        }
    }

    fn shown_classes(self) -> &'static str {
        "opacity-100 translate-y-0 scale-100"
    }

    fn transition_classes(self) -> &'static str {
        match self {
            Entrance::Grow => "transition-all duration-700 ease-out",
            _ => "transition-all duration-1000 ease-out",
        }
    }
}

/// Wraps section content in its entrance transition. The server always
/// renders the hidden state; the client resolves it either on the first
/// animation frame after hydration (`immediate`, used by the hero) or the
/// first time the block intersects the viewport. Once revealed, a block
/// stays revealed.
#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] immediate: bool,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (shown, set_shown) = signal(false);

    if immediate {
        // jump straight to the transition without waiting on the observer,
        // but give the hidden state one painted frame to transition from
        Effect::new(move |_| {
            request_animation_frame(move || set_shown(true));
        });
    } else {
        use_intersection_observer_with_options(
            target,
            move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    set_shown(true);
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![0.15]),
        );
    }

    let class = move || {
        let state = if shown() {
            entrance.shown_classes()
        } else {
            entrance.hidden_classes()
        };
        format!("{} {}", entrance.transition_classes(), state)
    };

    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entrance_starts_transparent() {
        for entrance in [
            Entrance::Fade,
            Entrance::Rise,
            Entrance::Lift,
            Entrance::Grow,
        ] {
            assert!(entrance.hidden_classes().contains("opacity-0"));
        }
    }

    #[test]
    fn test_resting_state_resolves_every_transform() {
        // each offset or scale a hidden state introduces must have a
        // counterpart in the shown classes, or the block never settles
        for entrance in [
            Entrance::Fade,
            Entrance::Rise,
            Entrance::Lift,
            Entrance::Grow,
        ] {
            let shown = entrance.shown_classes();
            assert!(shown.contains("opacity-100"));
            if entrance.hidden_classes().contains("translate-y") {
                assert!(shown.contains("translate-y-0"));
            }
            if entrance.hidden_classes().contains("scale-") {
                assert!(shown.contains("scale-100"));
            }
        }
    }

    #[test]
    fn test_grow_is_shorter_than_the_rest() {
        assert!(Entrance::Grow.transition_classes().contains("duration-700"));
        assert!(Entrance::Rise.transition_classes().contains("duration-1000"));
    }
}
