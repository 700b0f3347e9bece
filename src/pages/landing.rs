use yew::prelude::*;

struct Stat {
    target: u32,
    suffix: &'static str,
    label: &'static str,
}

struct Skill {
    name: &'static str,
    progress: u8,
}

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const STATS: &[Stat] = &[
    Stat { target: 120, suffix: "+", label: "Projects shipped" },
    Stat { target: 48, suffix: "", label: "Happy clients" },
    Stat { target: 9, suffix: "", label: "Years building" },
    Stat { target: 99, suffix: "%", label: "Uptime delivered" },
];

const SKILLS: &[Skill] = &[
    Skill { name: "Backend & APIs", progress: 95 },
    Skill { name: "Web frontends", progress: 88 },
    Skill { name: "Cloud & DevOps", progress: 82 },
    Skill { name: "Data pipelines", progress: 74 },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They rebuilt our checkout in six weeks and conversion went up the week it launched.",
        author: "Maria K.",
        role: "Head of Product, Fieldwork",
    },
    Testimonial {
        quote: "Clear estimates, no surprises, and code our own team actually enjoys maintaining.",
        author: "Jonas P.",
        role: "CTO, Lumen Freight",
    },
    Testimonial {
        quote: "The migration off our old stack happened without a single minute of downtime.",
        author: "Aiko T.",
        role: "Engineering Lead, Brightline",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <nav class="navbar-glass">
                <div class="nav-content">
                    <a href="#top" class="nav-logo">{"stack.dev"}</a>
                    <button class="navbar-toggler" aria-controls="primaryNav" aria-expanded="false" aria-label="Toggle navigation">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div id="primaryNav" class="nav-links">
                        <a href="#services" class="nav-link">{"Services"}</a>
                        <a href="#stats" class="nav-link">{"Numbers"}</a>
                        <a href="#testimonials" class="nav-link">{"Clients"}</a>
                        <a href="#contact" class="nav-link nav-cta">{"Contact"}</a>
                    </div>
                </div>
            </nav>

            <header id="top" class="hero">
                <h1>{"Software that ships, and keeps shipping."}</h1>
                <p class="hero-lead">
                    {"A small senior team for products that need to be fast, reliable and easy to change."}
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="btn btn-glow">{"Start a project"}</a>
                    <a href="#services" class="btn btn-ghost btn-glow">{"See what we do"}</a>
                </div>
            </header>

            <section id="services" class="section">
                <h2>{"What we're good at"}</h2>
                <div class="skills">
                    { for SKILLS.iter().map(|skill| html! {
                        <div class="skill">
                            <div class="skill-head">
                                <span>{skill.name}</span>
                                <span>{format!("{}%", skill.progress)}</span>
                            </div>
                            <div class="progress">
                                <div class="progress-bar" data-progress={skill.progress.to_string()}></div>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="stats" class="section stats">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">
                            <span class="counter" data-target={stat.target.to_string()}>{"0"}</span>
                            {stat.suffix}
                        </div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </section>

            <section id="testimonials" class="section">
                <h2>{"What clients say"}</h2>
                <div id="testimonialTrack" class="testimonial-track" tabindex="0">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <figure class="testimonial-item">
                            <blockquote>{t.quote}</blockquote>
                            <figcaption>
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <div class="testimonial-controls">
                    <button id="testPrev" class="btn btn-ghost" aria-label="Previous testimonial">{"←"}</button>
                    <span id="testIndicator" class="testimonial-indicator"></span>
                    <button id="testNext" class="btn btn-ghost" aria-label="Next testimonial">{"→"}</button>
                </div>
            </section>

            <section id="contact" class="section">
                <h2>{"Tell us about your project"}</h2>
                <form id="contactForm" class="contact-form" novalidate=true>
                    <input id="name" name="name" type="text" placeholder="Your name" aria-label="Your name" required=true />
                    <input id="email" name="email" type="email" placeholder="Email" aria-label="Email" required=true />
                    <textarea id="message" name="message" rows="5" placeholder="What are you building?" aria-label="Message" required=true />
                    <button type="submit" class="btn btn-glow">{"Send"}</button>
                    <p id="formStatus" class="form-status" aria-live="polite"></p>
                </form>
            </section>

            <footer class="footer">
                {"© "}<span id="year"></span>{" stack.dev"}
            </footer>

            <style>
                {r#"
                    .navbar-glass {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        backdrop-filter: blur(12px);
                        background: rgba(10, 12, 20, 0.35);
                        transition: background 0.25s ease, box-shadow 0.25s ease;
                    }
                    .navbar-glass.is-scrolled {
                        background: rgba(10, 12, 20, 0.85);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .navbar-toggler {
                        display: none;
                        background: none;
                        border: 0;
                    }
                    .navbar-toggler span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 4px 0;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .navbar-toggler {
                            display: block;
                        }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 1.5rem;
                            background: rgba(10, 12, 20, 0.95);
                        }
                        .nav-links.show {
                            display: flex;
                        }
                    }
                    .btn-glow {
                        position: relative;
                        overflow: hidden;
                    }
                    .btn-glow::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(circle at var(--mx, 50%) var(--my, 50%), rgba(120, 180, 255, 0.45), transparent 60%);
                        opacity: 0;
                        transition: opacity 0.2s ease;
                    }
                    .btn-glow:hover::after {
                        opacity: 1;
                    }
                    .progress {
                        height: 6px;
                        border-radius: 3px;
                        background: rgba(255, 255, 255, 0.08);
                    }
                    .progress-bar {
                        width: 0;
                        height: 100%;
                        border-radius: 3px;
                        background: linear-gradient(90deg, #4f8cff, #7ee0c3);
                        transition: width 1.1s ease-out;
                    }
                    .testimonial-item {
                        display: none;
                    }
                    .testimonial-item.is-active {
                        display: block;
                        animation: fadeIn 0.5s ease-in-out;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
