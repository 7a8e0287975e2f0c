//! Portfolio page and liveness routes.
//!
//! Serves the single-page portfolio at `/`. The page is embedded as
//! const HTML — no template engine, no asset pipeline. The contact form
//! mirrors the server-side constraints client-side and POSTs to
//! `/api/contact` with `fetch`, rendering success or error feedback
//! inline.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Build the site router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(portfolio_page))
        .route("/healthz", get(health))
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness probe for uptime monitors and deploy checks.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Serve the portfolio page.
async fn portfolio_page() -> Html<String> {
    let mut html = String::with_capacity(32768);
    html.push_str(PAGE_HEAD);
    html.push_str(PAGE_BODY);
    Html(html)
}

/// CSS and HTML head for the portfolio page.
const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Sowjanya Vangalapudi &mdash; Senior QA Consultant</title>
<link rel="preconnect" href="https://fonts.googleapis.com"/>
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin/>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet"/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#FAF9F7;--ink:#1F2430;--muted:#5B6472;--primary:#2458B3;--accent:#C96F1E;--card:#FFFFFF;--line:rgba(31,36,48,.1);--font:'Inter',-apple-system,sans-serif}
body{font-family:var(--font);background:var(--bg);color:var(--ink);line-height:1.6;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
.nav{position:sticky;top:0;background:rgba(250,249,247,.92);backdrop-filter:blur(8px);border-bottom:1px solid var(--line);z-index:10}
.nav-inner{max-width:1100px;margin:0 auto;padding:16px 24px;display:flex;align-items:center;justify-content:space-between}
.nav-logo{font-size:18px;font-weight:800;color:var(--primary)}
.nav-links{display:flex;gap:4px}
.nav-links a{color:var(--muted);font-size:14px;font-weight:600;padding:8px 14px;border-radius:8px;transition:all .2s}
.nav-links a:hover{color:var(--ink);background:rgba(36,88,179,.08)}
.hero{text-align:left;max-width:1100px;margin:0 auto;padding:100px 24px 80px;display:grid;grid-template-columns:3fr 2fr;gap:48px;align-items:center}
.hero-badge{display:inline-block;padding:6px 14px;border-radius:50px;background:rgba(36,88,179,.1);color:var(--primary);font-size:13px;font-weight:600;margin-bottom:20px}
.hero h1{font-size:52px;font-weight:800;line-height:1.08;letter-spacing:-1.5px;margin-bottom:12px}
.hero h1 span{color:var(--primary)}
.hero .role{font-size:22px;font-weight:600;color:var(--accent);margin-bottom:16px}
.hero .tagline{font-size:18px;font-weight:600;color:var(--ink);margin-bottom:12px}
.hero p.lead{font-size:16px;color:var(--muted);max-width:560px;margin-bottom:28px;line-height:1.75}
.hero-actions{display:flex;gap:12px}
.btn{display:inline-flex;align-items:center;gap:8px;padding:12px 26px;border-radius:10px;font-size:14px;font-weight:700;font-family:var(--font);border:none;cursor:pointer;transition:all .2s}
.btn-primary{background:var(--primary);color:#fff}.btn-primary:hover{background:#1C468F;transform:translateY(-1px)}
.btn-outline{background:transparent;color:var(--ink);border:1.5px solid var(--line)}.btn-outline:hover{border-color:var(--primary);color:var(--primary)}
.hero-photo{width:100%;aspect-ratio:1;border-radius:24px;background:linear-gradient(135deg,#2458B3,#C96F1E);display:flex;align-items:center;justify-content:center;color:#fff;font-size:72px;font-weight:800}
.section{max-width:1100px;margin:0 auto;padding:72px 24px}
.section.alt{max-width:none;background:var(--card);border-top:1px solid var(--line);border-bottom:1px solid var(--line)}
.section.alt>.section-inner{max-width:1100px;margin:0 auto;padding:0 24px}
.section h2{font-size:32px;font-weight:800;letter-spacing:-.5px;text-align:center;margin-bottom:8px}
.section .sub{font-size:16px;color:var(--muted);text-align:center;max-width:620px;margin:0 auto 48px}
.grid{display:grid;gap:18px}
.grid.cols-2{grid-template-columns:repeat(2,1fr)}
.grid.cols-4{grid-template-columns:repeat(4,1fr)}
.card{background:var(--card);border:1px solid var(--line);border-radius:16px;padding:28px;transition:all .2s}
.card:hover{border-color:rgba(36,88,179,.3);box-shadow:0 8px 30px rgba(31,36,48,.06)}
.card h3{font-size:16px;font-weight:700;margin-bottom:10px}
.card p{font-size:14px;color:var(--muted);line-height:1.7}
.card .meta{font-size:13px;color:var(--accent);font-weight:600;margin-bottom:6px}
.chips{display:flex;flex-wrap:wrap;gap:8px;margin-top:14px}
.chip{padding:5px 12px;border-radius:50px;background:rgba(36,88,179,.08);color:var(--primary);font-size:13px;font-weight:600}
.contact-grid{display:grid;grid-template-columns:1fr 1fr;gap:32px;align-items:start}
.field{margin-bottom:18px}
.field label{display:block;font-size:13px;font-weight:600;margin-bottom:6px}
.field input,.field textarea{width:100%;padding:12px 14px;border:1px solid var(--line);border-radius:10px;font-family:var(--font);font-size:14px;background:var(--bg)}
.field input:focus,.field textarea:focus{outline:2px solid rgba(36,88,179,.35);border-color:var(--primary)}
.field .err{display:none;color:#B3261E;font-size:13px;margin-top:5px}
.form-status{display:none;margin-top:16px;padding:12px 16px;border-radius:10px;font-size:14px;font-weight:600}
.form-status.ok{display:block;background:rgba(30,122,62,.1);color:#1E7A3E}
.form-status.fail{display:block;background:rgba(179,38,30,.08);color:#B3261E}
.direct{display:flex;flex-direction:column;gap:14px}
.direct a{color:var(--primary);font-weight:600;font-size:14px}
.footer{border-top:1px solid var(--line);max-width:1100px;margin:0 auto;padding:24px;display:flex;justify-content:space-between;font-size:13px;color:var(--muted)}
@media(max-width:820px){.hero{grid-template-columns:1fr;padding-top:64px}.hero h1{font-size:38px}.grid.cols-2,.grid.cols-4,.contact-grid{grid-template-columns:1fr}.nav-links{display:none}}
</style></head>
"##;

/// HTML body for the portfolio page, contact form included.
const PAGE_BODY: &str = r##"<body>
<nav class="nav"><div class="nav-inner">
  <div class="nav-logo">Sowjanya V.</div>
  <div class="nav-links">
    <a href="#about">About</a>
    <a href="#skills">Skills</a>
    <a href="#services">Services</a>
    <a href="#contact">Contact</a>
  </div>
</div></nav>

<section class="hero" id="home">
  <div>
    <span class="hero-badge">PSPO-I Certified &bull; 7+ Years Experience</span>
    <h1>Sowjanya<br/><span>Vangalapudi</span></h1>
    <div class="role">Senior QA Consultant &mdash; Test Lead</div>
    <div class="tagline">Driving Quality Through Strategy, Leadership &amp; Automation</div>
    <p class="lead">Transforming software quality through strategic leadership, innovative automation frameworks, and agile methodologies. Proven expertise in test management, API testing, and building high-performing QA teams.</p>
    <div class="hero-actions">
      <a href="#contact" class="btn btn-primary">Get In Touch</a>
      <a href="#services" class="btn btn-outline">What I Do</a>
    </div>
  </div>
  <div class="hero-photo">SV</div>
</section>

<section class="section alt" id="about"><div class="section-inner" style="padding-top:72px;padding-bottom:72px">
  <h2>About Me</h2>
  <p class="sub">Quality advocate, agile practitioner, and Professional Scrum Product Owner with a track record of leading QA programs end to end.</p>
  <div class="grid cols-2">
    <div class="card"><div class="meta">IIIT Hyderabad</div><h3>Product Management Summer School</h3><p>Formal grounding in product discovery and delivery, bridging QA strategy with product outcomes.</p></div>
    <div class="card"><div class="meta">Industry Recognition</div><h3>Women in Tech Nomination</h3><p>Recognized for technical leadership and mentorship across engineering teams.</p></div>
    <div class="card"><div class="meta">Leadership Excellence</div><h3>Prefect Leadership</h3><p>Early and sustained leadership roles, from student responsibility to leading distributed QA teams.</p></div>
    <div class="card"><div class="meta">Entrepreneurial Journey</div><h3>Jagriti Yatra Participant</h3><p>A cross-country entrepreneurship program that shaped a builder's view of software quality.</p></div>
  </div>
</div></section>

<section class="section" id="skills">
  <h2>Skills &amp; Expertise</h2>
  <p class="sub">A blend of test strategy, people leadership, and hands-on tooling.</p>
  <div class="grid cols-2">
    <div class="card"><h3>Test Management &amp; Strategy</h3><p>Planning, risk, and release discipline across the delivery lifecycle.</p>
      <div class="chips"><span class="chip">Test Planning</span><span class="chip">Risk Mitigation</span><span class="chip">Release Management</span></div></div>
    <div class="card"><h3>Leadership &amp; Agile</h3><p>Building teams and keeping stakeholders aligned at speed.</p>
      <div class="chips"><span class="chip">Team Management</span><span class="chip">Resource Planning</span><span class="chip">Stakeholder Communication</span></div></div>
    <div class="card"><h3>Tools &amp; Platforms</h3><p>Daily drivers across functional, API, and service testing.</p>
      <div class="chips"><span class="chip">UFT</span><span class="chip">SoapUI</span><span class="chip">JIRA</span><span class="chip">ServiceNow</span></div></div>
    <div class="card"><h3>Technologies</h3><p>Enough depth to read the code, query the data, and test the cloud.</p>
      <div class="chips"><span class="chip">SQL</span><span class="chip">C#</span><span class="chip">AWS</span><span class="chip">IBM Cloud</span></div></div>
  </div>
</section>

<section class="section alt" id="services"><div class="section-inner" style="padding-top:72px;padding-bottom:72px">
  <h2>Services</h2>
  <p class="sub">Ways we can work together to raise your quality bar.</p>
  <div class="grid cols-4">
    <div class="card"><h3>QA Leadership &amp; Governance</h3><p>Strategic QA leadership focusing on establishing robust governance frameworks, quality standards, and team excellence.</p></div>
    <div class="card"><h3>API &amp; Migration Testing</h3><p>Specialized expertise in API testing, data migration validation, and system integration verification.</p></div>
    <div class="card"><h3>Automation Framework Optimization</h3><p>Design and optimize automation frameworks for maximum efficiency, maintainability, and ROI.</p></div>
    <div class="card"><h3>Agile QA Coaching</h3><p>Transform your QA practices with agile methodologies, coaching teams to deliver quality at speed.</p></div>
  </div>
</div></section>

<section class="section" id="contact">
  <h2>Get In Touch</h2>
  <p class="sub">Ready to discuss your QA needs? Let's connect and explore how we can elevate your software quality together.</p>
  <div class="contact-grid">
    <div class="card">
      <h3 style="margin-bottom:18px">Send a Message</h3>
      <form id="contact-form" novalidate>
        <div class="field">
          <label for="name">Full Name</label>
          <input id="name" name="name" type="text" placeholder="Your full name"/>
          <p class="err" data-for="name"></p>
        </div>
        <div class="field">
          <label for="email">Email Address</label>
          <input id="email" name="email" type="email" placeholder="your.email@example.com"/>
          <p class="err" data-for="email"></p>
        </div>
        <div class="field">
          <label for="subject">Subject</label>
          <input id="subject" name="subject" type="text" placeholder="What would you like to discuss?"/>
          <p class="err" data-for="subject"></p>
        </div>
        <div class="field">
          <label for="message">Message</label>
          <textarea id="message" name="message" rows="5" placeholder="Tell me about your project or requirements..."></textarea>
          <p class="err" data-for="message"></p>
        </div>
        <button type="submit" class="btn btn-primary" id="send-btn" style="width:100%;justify-content:center">Send Message</button>
        <p class="form-status" id="form-status"></p>
      </form>
    </div>
    <div class="card">
      <h3 style="margin-bottom:18px">Direct Contact</h3>
      <div class="direct">
        <a href="mailto:sowjanya.vangalapudi@email.com">sowjanya.vangalapudi@email.com</a>
        <a href="https://linkedin.com/in/sowjanya-vangalapudi" target="_blank" rel="noopener noreferrer">linkedin.com/in/sowjanya-vangalapudi</a>
        <a href="https://github.com/sowjanya" target="_blank" rel="noopener noreferrer">github.com/sowjanya</a>
        <a href="https://twitter.com/sowjanya" target="_blank" rel="noopener noreferrer">twitter.com/sowjanya</a>
      </div>
    </div>
  </div>
</section>

<footer class="footer">
  <span>&copy; Sowjanya Vangalapudi</span>
  <span>Built with Rust &amp; Axum</span>
</footer>

<script>
(function(){
  var form = document.getElementById('contact-form');
  var status = document.getElementById('form-status');
  var btn = document.getElementById('send-btn');

  // Mirrors the server-side constraints; the server re-checks everything.
  var checks = {
    name: function(v){ return v.length >= 2 ? null : 'Name must be at least 2 characters'; },
    email: function(v){ return /^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(v) ? null : 'Please enter a valid email address'; },
    subject: function(v){ return v.length >= 5 ? null : 'Subject must be at least 5 characters'; },
    message: function(v){ return v.length >= 10 ? null : 'Message must be at least 10 characters'; }
  };

  function showErrors(errors){
    form.querySelectorAll('.err').forEach(function(p){ p.style.display = 'none'; });
    errors.forEach(function(e){
      var p = form.querySelector('.err[data-for="' + e.field + '"]');
      if (p) { p.textContent = e.message; p.style.display = 'block'; }
    });
  }

  form.addEventListener('submit', function(ev){
    ev.preventDefault();
    status.className = 'form-status';

    var payload = {};
    var errors = [];
    Object.keys(checks).forEach(function(field){
      var value = form.elements[field].value;
      payload[field] = value;
      var problem = checks[field](value);
      if (problem) { errors.push({ field: field, message: problem }); }
    });

    showErrors(errors);
    if (errors.length > 0) { return; }

    btn.disabled = true;
    btn.textContent = 'Sending...';

    fetch('/api/contact', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    }).then(function(res){ return res.json().then(function(body){ return { ok: res.ok, body: body }; }); })
      .then(function(result){
        if (result.ok && result.body.success) {
          status.textContent = "Message sent successfully! Thank you — I'll get back to you soon.";
          status.className = 'form-status ok';
          form.reset();
        } else if (result.body.errors) {
          showErrors(result.body.errors);
        } else {
          status.textContent = 'Error sending message. Please try again or use direct email contact.';
          status.className = 'form-status fail';
        }
      })
      .catch(function(){
        status.textContent = 'Error sending message. Please try again or use direct email contact.';
        status.className = 'form-status fail';
      })
      .finally(function(){
        btn.disabled = false;
        btn.textContent = 'Send Message';
      });
  });
})();
</script>
</body></html>
"##;
