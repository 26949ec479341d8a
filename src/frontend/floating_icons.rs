use yew::prelude::*;

struct IconPlacement {
    glyph: &'static str,
    left: f32,
    top: f32,
    size_rem: f32,
    delay_s: f32,
    duration_s: f32,
}

const ICONS: [IconPlacement; 8] = [
    IconPlacement { glyph: "🎬", left: 8.0, top: 18.0, size_rem: 2.2, delay_s: 0.0, duration_s: 7.0 },
    IconPlacement { glyph: "🎞", left: 86.0, top: 12.0, size_rem: 2.0, delay_s: 1.2, duration_s: 8.5 },
    IconPlacement { glyph: "✂", left: 14.0, top: 68.0, size_rem: 1.8, delay_s: 2.4, duration_s: 6.5 },
    IconPlacement { glyph: "▶", left: 78.0, top: 58.0, size_rem: 1.6, delay_s: 0.6, duration_s: 7.5 },
    IconPlacement { glyph: "🎥", left: 46.0, top: 8.0, size_rem: 1.9, delay_s: 3.0, duration_s: 9.0 },
    IconPlacement { glyph: "🎧", left: 92.0, top: 82.0, size_rem: 1.7, delay_s: 1.8, duration_s: 8.0 },
    IconPlacement { glyph: "🎵", left: 4.0, top: 44.0, size_rem: 1.5, delay_s: 4.2, duration_s: 6.0 },
    IconPlacement { glyph: "⏱", left: 62.0, top: 86.0, size_rem: 1.6, delay_s: 2.8, duration_s: 7.2 },
];

#[function_component(FloatingIcons)]
pub fn floating_icons() -> Html {
    html! {
        <div class="floating-icons" aria-hidden="true">
            {
                for ICONS.iter().map(|icon| {
                    let style = format!(
                        "left: {:.1}%; top: {:.1}%; font-size: {:.1}rem; animation-delay: {:.1}s; animation-duration: {:.1}s;",
                        icon.left, icon.top, icon.size_rem, icon.delay_s, icon.duration_s
                    );
                    html! { <span class="floating-icon" style={style}>{icon.glyph}</span> }
                })
            }
        </div>
    }
}
