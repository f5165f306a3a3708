use serde::Serialize;

/// One true/false question of the dashboard quiz. The timer, audio, and
/// modal choreography live in the UI; this is only the data and the
/// grading rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub answer: bool,
    pub explanation: &'static str,
}

impl QuizQuestion {
    pub fn check(&self, answer: bool) -> bool {
        self.answer == answer
    }
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 10] = [
    QuizQuestion {
        id: 1,
        prompt: "For the ship scenario, if the coefficient a1 is positive, the ship is unstable.",
        answer: true,
        explanation: "a1 = -C/I. If a1 > 0 then C < 0: the center of gravity sits too high and \
                      the ship capsizes.",
    },
    QuizQuestion {
        id: 2,
        prompt: "If the discriminant Δ is negative, the door closer is underdamped (the door \
                 slams).",
        answer: true,
        explanation: "The underdamped regime is defined by Δ < 0; the door overshoots, \
                      oscillates, and slams.",
    },
    QuizQuestion {
        id: 3,
        prompt: "A phase portrait showing inward spirals indicates an asymptotically stable \
                 system.",
        answer: true,
        explanation: "Inward spirals come from complex eigenvalues with negative real parts, \
                      the signature of a stable focus.",
    },
    QuizQuestion {
        id: 4,
        prompt: "The goal when tuning a door closer is the critical regime, where the \
                 discriminant Δ = 0.",
        answer: true,
        explanation: "Critical damping (Δ = 0) is the setting that closes the door as fast as \
                      possible without slamming.",
    },
    QuizQuestion {
        id: 5,
        prompt: "The ship's stability depends on the coefficient a2, and how fast the roll dies \
                 out depends only on a1.",
        answer: false,
        explanation: "It is the other way around: static stability depends on a1, and the decay \
                      of the roll depends only on a2 (water friction on the hull).",
    },
    QuizQuestion {
        id: 6,
        prompt: "A system with an eigenvalue λ = 0.5 is asymptotically stable.",
        answer: false,
        explanation: "A positive real part (0.5 > 0) means the system is unstable.",
    },
    QuizQuestion {
        id: 7,
        prompt: "If the distance Δ(t) between the nominal and perturbed trajectories grows \
                 exponentially, the system is stable.",
        answer: false,
        explanation: "Exponentially growing separation is extreme sensitivity to initial \
                      conditions, the signature of an unstable system.",
    },
    QuizQuestion {
        id: 8,
        prompt: "Perturbed-trajectory analysis tests the robustness of the system against an \
                 initial-condition error.",
        answer: true,
        explanation: "Exactly: it checks whether a small starting error is forgotten by the \
                      system or amplified.",
    },
    QuizQuestion {
        id: 9,
        prompt: "If the separation curve between the trajectories tends to 0 over time, the \
                 system is asymptotically stable.",
        answer: true,
        explanation: "The perturbed trajectory eventually rejoins the nominal one at the \
                      equilibrium.",
    },
    QuizQuestion {
        id: 10,
        prompt: "An unstable node (outward arrows) appears when the eigenvalues are real and \
                 negative.",
        answer: false,
        explanation: "An unstable node comes from real positive eigenvalues; real negative \
                      eigenvalues give a stable node.",
    },
];

pub fn question(id: u32) -> Option<&'static QuizQuestion> {
    QUIZ_QUESTIONS.iter().find(|q| q.id == id)
}

pub fn total_questions() -> usize {
    QUIZ_QUESTIONS.len()
}

/// A markdown help panel. Bodies support inline LaTeX the way the UI's
/// markdown renderer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpTopic {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static HELP_TOPICS: [HelpTopic; 6] = [
    HelpTopic {
        key: "theory",
        title: "Theory refresher",
        body: r#"### Dynamical systems and stability

A linear dynamical system is written

$$\dot{x} = Ax$$

with $A = \begin{pmatrix} 0 & 1 \\ a_1 & a_2 \end{pmatrix}$.

The stability of the equilibrium $(0,0)$ follows from the eigenvalues of $A$:
- all real parts negative: **asymptotically stable**
- any real part positive: **unstable**
- real parts zero: **oscillation** (stable, not asymptotically)
"#,
    },
    HelpTopic {
        key: "scenario_none",
        title: "Custom scenario",
        body: r#"You chose your own coefficients $a_1$ and $a_2$.

The system reads

$$\dot{x} = \begin{pmatrix} 0 & 1 \\ a_1 & a_2 \end{pmatrix} \begin{pmatrix} x \\ \dot{x} \end{pmatrix}$$
"#,
    },
    HelpTopic {
        key: "scenario_ship",
        title: "Ship stability (roll)",
        body: r#"### Physical model
Rolling motion of a ship about its upright equilibrium.

The linearized equation is

$$I\ddot{\theta} + B\dot{\theta} + C\theta = 0$$

In state form: $a_1 = -C/I$ is the static stability (height of the center of
gravity), $a_2 = -B/I$ is the water friction on the hull, and $x$ is the
roll angle $\theta$.

### Stability analysis
- **$a_1 < 0$ (C > 0)**: the ship is stable; it returns upright after a wave.
- **$a_1 > 0$ (C < 0)**: the ship is **unstable** (center of gravity too high); it capsizes.
- **$a_2$** sets how quickly the rolling dies out.
"#,
    },
    HelpTopic {
        key: "scenario_door",
        title: "Automatic door closer",
        body: r#"### Physical model
A door fitted with a return spring and a hydraulic damper. The tuning goal
is to close the door as fast as possible without slamming (critical regime).

$$I\ddot{\theta} + c\dot{\theta} + k\theta = 0$$

with $a_1 = -k/I$ (spring) and $a_2 = -c/I$ (hydraulic brake); $x$ is the
opening angle, $x = 0$ meaning closed.

### Damping regimes
Behavior follows the discriminant $\Delta = a_2^2 + 4a_1$:
- **Underdamped** ($\Delta < 0$): too little damping; the door oscillates and slams.
- **Overdamped** ($\Delta > 0$): too much damping; the door takes forever to close.
- **Critical** ($\Delta = 0$): the perfect setting.
"#,
    },
    HelpTopic {
        key: "scenario_suspension",
        title: "Car suspension",
        body: r#"### Physical model
Quarter-car model: the wheel assembly on its spring and shock absorber.

$$m\ddot{z} + c\dot{z} + k z = 0$$

with $a_1 = -k/m$ and $a_2 = -c/m$; $x$ is the vertical deflection $z$.

A comfortable setup is slightly underdamped: the body absorbs the bump in
one soft rebound. A worn shock absorber lowers $|a_2|$ and the car keeps
bouncing; too stiff a shock transmits the bump directly.
"#,
    },
    HelpTopic {
        key: "detail",
        title: "Reading the plots",
        body: r#"### 1 - Phase portrait
A plot in the state plane ($\mathbf{x} = [X, Y]^T$) showing the qualitative
behavior of the system. Each point is a possible initial state and the
vector field gives the direction and speed of motion from there.

Diagnosis at a glance:
- **Asymptotically stable**: neighboring trajectories head into the origin.
- **Unstable**: trajectories leave the origin.
- **Marginally stable**: closed loops around the origin, permanent oscillation without convergence.

### 2 - Perturbations
Compares the trajectory from a nominal initial condition with one started
from a slightly perturbed initial condition.

- **Robust/stable**: the separation shrinks with time; the system forgets the starting error and both trajectories join at the equilibrium.
- **Sensitive/unstable**: the separation grows; a tiny error amplifies and the trajectories diverge.
"#,
    },
];

pub fn help_topic(key: &str) -> Option<&'static HelpTopic> {
    HELP_TOPICS.iter().find(|topic| topic.key == key)
}

/// Help panel for a scenario dropdown value, falling back to the custom
/// scenario text when the scenario has no dedicated topic.
pub fn scenario_help(scenario: &str) -> &'static HelpTopic {
    let key = format!("scenario_{scenario}");
    help_topic(&key).unwrap_or_else(|| {
        help_topic("scenario_none").expect("scenario_none topic is always present")
    })
}
