use leptos::prelude::*;
use leptos_meta::Title;

use crate::sections::{CONTACT_EMAIL, PROJECTS, SKILLS};

use super::reveal::{Entrance, Reveal};
use super::scroll;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <SectionBlock id="home">
            <Reveal entrance=Entrance::Rise immediate=true>
                <div class="text-center space-y-6">
                    <h1 class="text-6xl md:text-7xl font-bold tracking-tight text-cyan-300 drop-shadow-[0_0_20px_rgba(34,211,238,0.8)]">
                        "Hi, I'm " <span class="text-white">"Guiliani Pobre"</span>
                    </h1>
                    <p class="text-gray-300 text-lg md:text-xl">
                        "Full-Stack Developer | Futuristic Thinker"
                    </p>
                    <a
                        href="#projects"
                        on:click=scroll::handle_anchor_click
                        class="inline-block mt-6 px-8 py-3 border border-cyan-400 rounded-full hover:bg-cyan-400 hover:text-black text-cyan-300 font-medium transition-all shadow-[0_0_20px_rgba(34,211,238,0.5)] hover:shadow-[0_0_30px_rgba(34,211,238,0.8)]"
                    >
                        "View My Work"
                    </a>
                </div>
            </Reveal>
        </SectionBlock>
        <SectionBlock id="about">
            <Reveal>
                <div class="max-w-2xl mx-auto text-center space-y-6">
                    <h2 class="text-4xl font-semibold text-cyan-400 relative inline-block">
                        "About Me"
                        <span class="absolute inset-x-0 bottom-0 h-[2px] bg-gradient-to-r from-cyan-400 via-pink-500 to-cyan-400 blur-sm"></span>
                    </h2>
                    <p class="text-gray-300 leading-relaxed text-lg">
                        "I'm a passionate developer who loves creating clean, futuristic web experiences with modern frameworks and smooth UX. My focus is on performance, aesthetics, and intuitive interaction."
                    </p>
                </div>
            </Reveal>
        </SectionBlock>
        <SectionBlock id="skills">
            <Reveal entrance=Entrance::Grow>
                <div class="text-center">
                    <h2 class="text-4xl font-semibold text-cyan-400 mb-10 relative inline-block">
                        "Skills & Tools"
                        <span class="absolute inset-x-0 bottom-0 h-[2px] bg-gradient-to-r from-pink-500 to-cyan-400 blur-sm"></span>
                    </h2>
                    <div class="flex flex-wrap justify-center gap-6 text-gray-300">
                        {SKILLS
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-6 py-2 border border-cyan-400/40 rounded-full hover:bg-cyan-400 hover:text-black transition-all shadow-[0_0_10px_rgba(34,211,238,0.5)] hover:shadow-[0_0_20px_rgba(34,211,238,0.9)]">
                                        {skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </SectionBlock>
        <SectionBlock id="projects">
            <Reveal>
                <div class="max-w-5xl mx-auto text-center">
                    <h2 class="text-4xl font-semibold text-cyan-400 mb-10 relative inline-block">
                        "Projects"
                        <span class="absolute inset-x-0 bottom-0 h-[2px] bg-gradient-to-r from-cyan-400 via-pink-500 to-cyan-400 blur-sm"></span>
                    </h2>
                    <div class="grid md:grid-cols-2 gap-8">
                        {PROJECTS
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <div class="p-8 border border-gray-700 rounded-2xl bg-gradient-to-br from-black to-gray-900 hover:from-cyan-900/20 hover:to-pink-900/20 transition-all shadow-[0_0_20px_rgba(34,211,238,0.2)] hover:shadow-[0_0_30px_rgba(236,72,153,0.4)]">
                                        <h3 class="text-xl font-semibold mb-2 text-cyan-300">
                                            {project.name}
                                        </h3>
                                        <p class="text-gray-400 text-sm">{project.summary}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </SectionBlock>
        <SectionBlock id="contact">
            <Reveal entrance=Entrance::Lift>
                <div class="text-center space-y-6">
                    <h2 class="text-4xl font-semibold text-cyan-400 relative inline-block">
                        "Contact Me"
                        <span class="absolute inset-x-0 bottom-0 h-[2px] bg-gradient-to-r from-pink-500 to-cyan-400 blur-sm"></span>
                    </h2>
                    <p class="text-gray-400 text-lg">
                        "Let's build something incredible together. Reach out anytime."
                    </p>
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="inline-block mt-4 px-8 py-3 border border-cyan-400 rounded-full hover:bg-cyan-400 hover:text-black text-cyan-300 font-medium transition-all shadow-[0_0_25px_rgba(34,211,238,0.6)] hover:shadow-[0_0_40px_rgba(236,72,153,0.6)]"
                    >
                        "Send Message"
                    </a>
                    <p class="text-gray-600 text-xs pt-8">
                        "Built with Rust & Leptos · " {env!("BUILD_TIME")}
                    </p>
                </div>
            </Reveal>
        </SectionBlock>
    }
}

#[component]
fn SectionBlock(id: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="h-screen flex flex-col justify-center items-center px-8 snap-start relative">
            {children()}
        </section>
    }
}
