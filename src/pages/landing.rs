//! The product page: hero, feature grid, stats, how-it-works, benefits,
//! contact and footer, plus the page styles.

use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::navbar::scroll_to_section;
use crate::components::stat_counter::StatCounter;
use crate::components::tilt_card::TiltCard;
use crate::effects::ripple;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📷",
        "Face Recognition Roll Call",
        "One camera at the classroom door marks the whole class present in seconds. No app, no tap, no queue.",
    ),
    (
        "📶",
        "Works Offline",
        "Built for patchy rural connectivity. Attendance is recorded locally and synced whenever the network returns.",
    ),
    (
        "⚡",
        "Instant Reports",
        "Daily, weekly and term summaries ready the moment the bell rings, exportable for district reviews.",
    ),
    (
        "📱",
        "Parent SMS Alerts",
        "Guardians get a plain text message when a student is absent. Works on any phone, no smartphone needed.",
    ),
    (
        "🔒",
        "Private by Design",
        "Face templates never leave the school. Only attendance marks are shared upstream.",
    ),
    (
        "🌞",
        "Solar-Friendly Hardware",
        "The kit sips power and runs through outages, so attendance never depends on the grid.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Mount the camera",
        "A teacher fixes the unit by the door and pairs it with the school tablet in under ten minutes.",
    ),
    (
        "Enroll each class",
        "Students look at the camera once. Enrollment happens on-device and takes seconds per student.",
    ),
    (
        "Let mornings run themselves",
        "Students walk in, the register fills itself, and teachers start teaching instead of counting.",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let cta_contact = Callback::from(|event: MouseEvent| {
        ripple::spawn(&event);
        scroll_to_section("#contact");
    });
    let cta_how = Callback::from(|event: MouseEvent| {
        ripple::spawn(&event);
        scroll_to_section("#how-it-works");
    });

    html! {
        <div class="landing-page">
            <div class="page-loader">
                <div class="loader-spinner"></div>
            </div>

            <section id="home" class="hero-section">
                <div class="floating-shapes" aria-hidden="true">
                    <span class="shape shape-1"></span>
                    <span class="shape shape-2"></span>
                    <span class="shape shape-3"></span>
                    <span class="shape shape-4"></span>
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Every student counted, every morning"}</h1>
                    <p class="hero-subtitle">
                        {"Attendly turns roll call into a camera glance. Automated, offline-first attendance built for rural schools."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="btn-hero" type="button" onclick={cta_contact.clone()}>
                            {"Request a Demo"}
                        </button>
                        <button class="btn-hero btn-hero-ghost" type="button" onclick={cta_how}>
                            {"See How It Works"}
                        </button>
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="section-head animate-on-scroll">
                    <h2>{"Built for real classrooms"}</h2>
                    <p>{"Everything a school needs to stop losing teaching time to the register."}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <TiltCard class={classes!("feature-card", "animate-on-scroll")}>
                            <span class="feature-icon" aria-hidden="true">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </TiltCard>
                    }) }
                </div>
            </section>

            <div class="stats-band">
                <StatCounter value={1250.0} label="Students tracked daily" />
                <StatCounter value={98.6} suffix="%" label="Roll-call accuracy" />
                <StatCounter value={47.0} label="Partner schools" />
                <StatCounter value={36.0} suffix="hrs" label="Teaching time saved per term" />
            </div>

            <section id="how-it-works" class="steps-section">
                <div class="section-head animate-on-scroll">
                    <h2>{"Up and running in a morning"}</h2>
                </div>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(index, (title, body))| html! {
                        <div class="step animate-on-scroll">
                            <span class="step-number">{index + 1}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="benefits" class="benefits-section">
                <div class="benefits-content">
                    <div class="benefits-text animate-on-scroll">
                        <h2>{"Teachers teach. The register keeps itself."}</h2>
                        <p>
                            {"Manual roll call eats ten minutes of every lesson and still produces registers nobody trusts. Attendly gives that time back and hands administrators numbers they can act on the same day."}
                        </p>
                        <ul class="benefits-list">
                            <li>{"No more paper registers or retrospective guessing"}</li>
                            <li>{"Early-warning flags for students drifting toward dropout"}</li>
                            <li>{"District reporting without end-of-term scrambles"}</li>
                        </ul>
                    </div>
                    <TiltCard class={classes!("benefit-floating-card", "animate-on-scroll")}>
                        <span class="benefit-card-day">{"Tuesday, Grade 5"}</span>
                        <span class="benefit-card-figure">{"31/32"}</span>
                        <span class="benefit-card-note">{"present · register closed 08:04"}</span>
                    </TiltCard>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="section-head animate-on-scroll">
                    <h2>{"Bring Attendly to your school"}</h2>
                    <p>{"Tell us about your classrooms and we'll set up a pilot."}</p>
                </div>
                <div class="contact-inner animate-on-scroll">
                    <ContactForm />
                </div>
            </section>

            <footer class="site-footer">
                <p>{"Attendly — automated attendance for rural schools"}</p>
                <p class="footer-fine">{"© 2026 Attendly. Built for modern education."}</p>
            </footer>

            <style>
                {STYLES}
            </style>
        </div>
    }
}

const STYLES: &str = r#"
.landing-page {
    position: relative;
    min-height: 100vh;
    overflow-x: hidden;
}

/* Page loader */
.page-loader {
    position: fixed;
    inset: 0;
    background: var(--bg);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 100;
    transition: opacity 0.5s ease;
}
.page-loader.loaded {
    opacity: 0;
    pointer-events: none;
}
.loader-spinner {
    width: 42px;
    height: 42px;
    border: 3px solid var(--card-border);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Navbar */
.glass-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    backdrop-filter: blur(12px);
    transition: background var(--transition-normal) ease, box-shadow var(--transition-normal) ease;
}
.glass-nav.scrolled {
    background: var(--nav-bg);
    box-shadow: 0 2px 24px var(--shadow);
}
.nav-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-brand {
    font-size: 1.3rem;
    font-weight: 700;
    color: var(--text);
    text-decoration: none;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-right: auto;
}
.nav-brand-mark {
    color: var(--accent);
}
.nav-links {
    display: flex;
    gap: 0.5rem;
}
.nav-link {
    color: var(--text-muted);
    text-decoration: none;
    padding: 0.4rem 0.9rem;
    border-radius: 8px;
    transition: color var(--transition-normal) ease, background var(--transition-normal) ease;
}
.nav-link:hover {
    color: var(--text);
}
.nav-link.active {
    color: var(--accent);
    background: var(--accent-soft);
}
.theme-toggle,
.nav-menu-toggle {
    background: none;
    border: 1px solid var(--card-border);
    border-radius: 8px;
    color: var(--text);
    font-size: 1rem;
    padding: 0.35rem 0.7rem;
    cursor: pointer;
    transition: border-color var(--transition-normal) ease;
}
.theme-toggle:hover,
.nav-menu-toggle:hover {
    border-color: var(--accent);
}
.nav-menu-toggle {
    display: none;
}

/* Hero */
.hero-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    position: relative;
    overflow: hidden;
    padding: 6rem 2rem 4rem;
}
.hero-content {
    max-width: 720px;
    position: relative;
    z-index: 2;
}
.hero-title {
    font-size: 3.2rem;
    font-weight: 700;
    margin-bottom: 1.2rem;
    background: linear-gradient(45deg, var(--text), var(--accent));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-subtitle {
    font-size: 1.25rem;
    color: var(--text-muted);
    line-height: 1.7;
    margin-bottom: 2.5rem;
}
.hero-cta-group {
    display: flex;
    gap: 1rem;
    justify-content: center;
}
.btn-hero {
    position: relative;
    overflow: hidden;
    background: linear-gradient(45deg, var(--accent), var(--accent-2));
    color: #fff;
    border: none;
    border-radius: 10px;
    padding: 0.9rem 2rem;
    font-size: 1.05rem;
    cursor: pointer;
    transition: transform var(--transition-normal) ease, box-shadow var(--transition-normal) ease;
}
.btn-hero:hover {
    transform: translateY(-2px);
    box-shadow: 0 6px 24px var(--accent-soft);
}
.btn-hero-ghost {
    background: transparent;
    border: 1px solid var(--card-border);
    color: var(--text);
}
.ripple {
    position: absolute;
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.5);
    transform: translate(-50%, -50%);
    pointer-events: none;
    animation: ripple 0.6s ease-out forwards;
}
@keyframes ripple {
    to {
        width: 260px;
        height: 260px;
        opacity: 0;
    }
}

/* Floating shapes */
.floating-shapes .shape {
    position: absolute;
    border-radius: 50%;
    filter: blur(2px);
    opacity: 0.35;
    animation: float 9s ease-in-out infinite;
}
.shape-1 { width: 140px; height: 140px; top: 18%; left: 12%; background: var(--accent); }
.shape-2 { width: 90px; height: 90px; top: 64%; left: 20%; background: var(--accent-2); animation-delay: -2s; }
.shape-3 { width: 120px; height: 120px; top: 28%; right: 14%; background: var(--accent-2); animation-delay: -4s; }
.shape-4 { width: 70px; height: 70px; top: 70%; right: 22%; background: var(--accent); animation-delay: -6s; }
@keyframes float {
    0%, 100% { margin-top: 0; }
    50% { margin-top: -24px; }
}

/* Scroll reveal */
.animate-on-scroll {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity var(--transition-slow) ease, transform var(--transition-slow) ease;
}
.animate-on-scroll.animated {
    opacity: 1;
    transform: translateY(0);
}

/* Sections */
section {
    padding: 6rem 2rem;
    max-width: 1200px;
    margin: 0 auto;
}
.section-head {
    text-align: center;
    margin-bottom: 3rem;
}
.section-head h2 {
    font-size: 2.4rem;
    margin-bottom: 0.8rem;
    background: linear-gradient(45deg, var(--text), var(--accent));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.section-head p {
    color: var(--text-muted);
    font-size: 1.15rem;
}

/* Features */
.feature-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.feature-card {
    position: relative;
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 16px;
    padding: 2rem;
    transition: transform var(--transition-normal) ease, border-color var(--transition-normal) ease;
}
.feature-card::before {
    content: '';
    position: absolute;
    inset: 0;
    border-radius: inherit;
    background: radial-gradient(
        circle at var(--mouse-x, 50%) var(--mouse-y, 50%),
        var(--accent-soft),
        transparent 60%
    );
    opacity: 0;
    transition: opacity var(--transition-normal) ease;
    pointer-events: none;
}
.feature-card:hover::before {
    opacity: 1;
}
.feature-icon {
    font-size: 2rem;
    display: block;
    margin-bottom: 1rem;
}
.feature-card h3 {
    font-size: 1.25rem;
    margin-bottom: 0.6rem;
    color: var(--text);
}
.feature-card p {
    color: var(--text-muted);
    line-height: 1.6;
}

/* Stats */
.stats-band {
    display: flex;
    justify-content: center;
    gap: 4rem;
    padding: 3.5rem 2rem;
    background: var(--bg-soft);
    border-top: 1px solid var(--card-border);
    border-bottom: 1px solid var(--card-border);
    flex-wrap: wrap;
}
.stat-item {
    text-align: center;
    min-width: 140px;
}
.stat-number {
    font-size: 2.6rem;
    font-weight: 700;
    color: var(--accent);
}
.stat-suffix {
    font-size: 1.6rem;
    font-weight: 700;
    color: var(--accent);
    margin-left: 0.15rem;
}
.stat-label {
    display: block;
    margin-top: 0.4rem;
    color: var(--text-muted);
}

/* Steps */
.steps-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.step {
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 16px;
    padding: 2.2rem;
    position: relative;
}
.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 34px;
    height: 34px;
    border-radius: 50%;
    border: 2px solid var(--accent);
    color: var(--accent);
    font-weight: 700;
    margin-bottom: 1rem;
}
.step h3 {
    margin-bottom: 0.6rem;
    color: var(--text);
}
.step p {
    color: var(--text-muted);
    line-height: 1.6;
}

/* Benefits */
.benefits-content {
    display: flex;
    align-items: center;
    gap: 4rem;
}
.benefits-text {
    flex: 1;
}
.benefits-text h2 {
    font-size: 2.2rem;
    margin-bottom: 1rem;
    color: var(--text);
}
.benefits-text p {
    color: var(--text-muted);
    line-height: 1.7;
    margin-bottom: 1.2rem;
}
.benefits-list {
    list-style: none;
    padding: 0;
}
.benefits-list li {
    color: var(--text-muted);
    padding-left: 1.4rem;
    position: relative;
    margin-bottom: 0.6rem;
}
.benefits-list li::before {
    content: '✓';
    color: var(--accent);
    position: absolute;
    left: 0;
}
.benefit-floating-card {
    flex: 0 0 280px;
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 20px;
    padding: 2.2rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    text-align: center;
    box-shadow: 0 12px 40px var(--shadow);
    transition: transform var(--transition-normal) ease;
}
.benefit-card-day {
    color: var(--text-muted);
    font-size: 0.95rem;
}
.benefit-card-figure {
    font-size: 2.4rem;
    font-weight: 700;
    color: var(--accent);
}
.benefit-card-note {
    color: var(--text-muted);
    font-size: 0.9rem;
}

/* Contact */
.contact-inner {
    max-width: 640px;
    margin: 0 auto;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.form-row {
    display: flex;
    gap: 1rem;
}
.form-row .form-field {
    flex: 1;
}
.form-field {
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 10px;
    color: var(--text);
    padding: 0.85rem 1rem;
    font-size: 1rem;
    font-family: inherit;
    transition: border-color var(--transition-normal) ease;
}
.form-field:focus {
    outline: none;
    border-color: var(--accent);
}
.form-field.error {
    border-color: var(--danger);
}
.form-sent {
    color: var(--accent);
    text-align: center;
}

/* Footer */
.site-footer {
    text-align: center;
    padding: 3rem 2rem;
    border-top: 1px solid var(--card-border);
    color: var(--text-muted);
}
.footer-fine {
    font-size: 0.85rem;
    margin-top: 0.5rem;
}

/* Back to top */
.back-to-top {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    width: 46px;
    height: 46px;
    border-radius: 50%;
    border: none;
    background: linear-gradient(45deg, var(--accent), var(--accent-2));
    color: #fff;
    font-size: 1.2rem;
    cursor: pointer;
    opacity: 0;
    transform: translateY(12px);
    pointer-events: none;
    transition: opacity var(--transition-normal) ease, transform var(--transition-normal) ease;
    z-index: 40;
}
.back-to-top.visible {
    opacity: 1;
    transform: translateY(0);
    pointer-events: auto;
}

@media (max-width: 1024px) {
    .feature-grid {
        grid-template-columns: repeat(2, 1fr);
    }
    .benefits-content {
        flex-direction: column;
        gap: 2rem;
    }
}

@media (max-width: 768px) {
    .nav-links {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: var(--nav-bg);
        padding: 1rem 2rem;
        display: none;
        box-shadow: 0 12px 24px var(--shadow);
    }
    .nav-links.open {
        display: flex;
    }
    .nav-menu-toggle {
        display: inline-flex;
    }
    .hero-title {
        font-size: 2.2rem;
    }
    .hero-cta-group {
        flex-direction: column;
        align-items: center;
    }
    .feature-grid,
    .steps-grid {
        grid-template-columns: 1fr;
    }
    .stats-band {
        gap: 2rem;
    }
    .form-row {
        flex-direction: column;
    }
    section {
        padding: 4rem 1rem;
    }
}
"#;
