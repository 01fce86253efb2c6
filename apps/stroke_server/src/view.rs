//! HTML rendering of the prediction page

use minijinja::Environment;
use serde::Serialize;
use stroke_ai::{Assessment, Diagnosis, ProbabilityDistribution, Recommendation, StatusMessage};
use stroke_data::{
    Age, Bmi, Category, Gender, GlucoseLevel, PatientForm, PatientRecord, ResidenceType,
    SmokingStatus, ValidationErrors, WorkType, YesNo,
};

pub const PAGE_TITLE: &str = "Heart Stroke Prediction";

const DESCRIPTION: [&str; 2] = [
    "The World Health Organization (WHO) identifies strokes as the second leading cause of death \
     globally. A stroke happens when a person’s blood supply to their brain is interrupted or \
     reduced, causing brain cells to die within minutes. It prevents the brain tissue from \
     getting the oxygen and nutrients that it needs and is responsible for approximately 11% of \
     total deaths.",
    "The website aims at classifying the heart stroke based on the input parameters like gender, \
     age, various diseases, and smoking status. Since, the project is related to medical domain \
     multiple models were trained and their performance was compared considering the \
     sensitivity, accuracy, as well as specificity scores in the course: CSL2050 Pattern \
     Recognition and Machine Learning under Prof. Richa Singh.",
];

const PAGE_TEMPLATE: &str = "page.html";

#[derive(Debug, Serialize)]
struct Choice {
    label: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Control {
    Select {
        name: &'static str,
        label: &'static str,
        choices: Vec<Choice>,
    },
    Radio {
        name: &'static str,
        label: &'static str,
        choices: Vec<Choice>,
    },
    Slider {
        name: &'static str,
        label: &'static str,
        min: i64,
        max: i64,
        value: String,
    },
}

fn choices<C: Category>(current: &str) -> Vec<Choice> {
    C::ALL
        .iter()
        .map(|c| Choice {
            label: c.label(),
            selected: c.label() == current.trim(),
        })
        .collect()
}

fn controls(form: &PatientForm) -> Vec<Control> {
    vec![
        Control::Select {
            name: "gender",
            label: "Gender",
            choices: choices::<Gender>(&form.gender),
        },
        Control::Slider {
            name: "age",
            label: "Age",
            min: Age::MIN.into(),
            max: Age::MAX.into(),
            value: form.age.clone(),
        },
        Control::Radio {
            name: "hypertension",
            label: "Hypertension",
            choices: choices::<YesNo>(&form.hypertension),
        },
        Control::Radio {
            name: "heart_disease",
            label: "Heart Disease",
            choices: choices::<YesNo>(&form.heart_disease),
        },
        Control::Radio {
            name: "ever_married",
            label: "Ever Married",
            choices: choices::<YesNo>(&form.ever_married),
        },
        Control::Select {
            name: "work_type",
            label: "Work Type",
            choices: choices::<WorkType>(&form.work_type),
        },
        Control::Radio {
            name: "residence_type",
            label: "Residence Type",
            choices: choices::<ResidenceType>(&form.residence_type),
        },
        Control::Slider {
            name: "avg_glucose_level",
            label: "Average Glucose Level",
            min: GlucoseLevel::MIN.into(),
            max: GlucoseLevel::MAX.into(),
            value: form.avg_glucose_level.clone(),
        },
        Control::Slider {
            name: "bmi",
            label: "BMI",
            min: Bmi::MIN.into(),
            max: Bmi::MAX.into(),
            value: form.bmi.clone(),
        },
        Control::Select {
            name: "smoking_status",
            label: "Smoking Status",
            choices: choices::<SmokingStatus>(&form.smoking_status),
        },
    ]
}

#[derive(Debug, Serialize)]
struct Probability {
    class: &'static str,
    value: String,
}

fn probability_rows(d: &ProbabilityDistribution) -> Vec<Probability> {
    vec![
        Probability {
            class: "No Stroke",
            value: format!("{:.4}", d.no_stroke),
        },
        Probability {
            class: "Stroke",
            value: format!("{:.4}", d.stroke),
        },
    ]
}

#[derive(Debug, Serialize)]
struct Row {
    column: &'static str,
    value: String,
}

/// Everything the page template needs for one render.
#[derive(Debug, Serialize)]
pub struct PageView {
    title: &'static str,
    description: &'static [&'static str],
    controls: Vec<Control>,
    rows: Vec<Row>,
    status: StatusMessage,
    probabilities: Vec<Probability>,
    recommendations: Vec<Recommendation>,
    errors: Vec<String>,
}

impl PageView {
    fn base(form: &PatientForm, status: StatusMessage) -> Self {
        Self {
            title: PAGE_TITLE,
            description: &DESCRIPTION,
            controls: controls(form),
            rows: Vec::new(),
            status,
            probabilities: Vec::new(),
            recommendations: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn with_rows(mut self, record: &PatientRecord) -> Self {
        self.rows = record
            .display_rows()
            .into_iter()
            .map(|(column, value)| Row { column, value })
            .collect();
        self
    }

    /// First visit: default controls, echo table and the submit prompt.
    pub fn initial() -> Self {
        let record = PatientRecord::default();
        Self::base(&PatientForm::from(&record), Diagnosis::NotSubmitted.message()).with_rows(&record)
    }

    pub fn assessed(assessment: &Assessment) -> Self {
        let status = StatusMessage {
            style: assessment.style,
            text: assessment.message.clone(),
        };
        let mut view =
            Self::base(&PatientForm::from(&assessment.input), status).with_rows(&assessment.input);
        view.probabilities = probability_rows(&assessment.probabilities);
        view.recommendations = assessment.recommendations.clone();
        view
    }

    /// Re-display a rejected submission with every problem listed.
    pub fn rejected(form: &PatientForm, errors: &ValidationErrors) -> Self {
        let mut view = Self::base(form, Diagnosis::NotSubmitted.message());
        view.errors = errors.iter().map(ToString::to_string).collect();
        view
    }

    /// Valid input the model could not score.
    pub fn failed(record: &PatientRecord, reason: &str) -> Self {
        let mut view = Self::base(&PatientForm::from(record), Diagnosis::NotSubmitted.message())
            .with_rows(record);
        view.errors = vec![format!("prediction failed: {reason}")];
        view
    }
}

/// Template environment; `.html` templates are auto-escaped.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../templates/page.html"))?;
        Ok(Self { env })
    }

    pub fn render(&self, page: &PageView) -> Result<String, minijinja::Error> {
        self.env.get_template(PAGE_TEMPLATE)?.render(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stroke_ai::SUBMIT_PROMPT;

    fn render(page: &PageView) -> String {
        Views::new().unwrap().render(page).unwrap()
    }

    #[test]
    fn initial_page_has_form_table_and_prompt() {
        let html = render(&PageView::initial());
        assert!(html.contains("<title>Heart Stroke Prediction</title>"));
        assert!(html.contains("Stroke Test Result"));
        assert!(html.contains("Input features"));
        assert!(html.contains("Avg Glucose Level"));
        assert!(html.contains("Please press &#x27;Stroke Test Result&#x27; button for prediction!!"));
        assert!(!html.contains("Probabilities"));
        assert!(!SUBMIT_PROMPT.is_empty());
    }

    #[test]
    fn description_paragraphs_are_shown() {
        let html = render(&PageView::initial());
        assert!(html.contains("second leading cause of death globally."));
        assert!(html.contains("A stroke happens when a person’s blood supply"));
        assert!(html.contains("as well as specificity scores"));
        assert_eq!(html.matches("<p>").count(), DESCRIPTION.len());
    }

    #[test]
    fn every_option_is_offered() {
        let html = render(&PageView::initial());
        for label in WorkType::ALL.iter().map(|w| w.label()) {
            assert!(html.contains(&format!("value=\"{label}\"")), "{label}");
        }
        assert!(html.contains("min=\"1\" max=\"350\""));
    }

    #[test]
    fn rejected_input_is_escaped_and_listed() {
        let form = PatientForm {
            gender: "<b>x</b>".into(),
            ..PatientForm::from(&PatientRecord::default())
        };
        let errors = form.validate().unwrap_err();
        let html = render(&PageView::rejected(&form, &errors));
        assert!(html.contains("gender: unknown option"));
        assert!(html.contains("&lt;b&gt;x&lt;&#x2f;b&gt;"));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn selected_option_follows_the_form() {
        let record = PatientRecord {
            smoking_status: SmokingStatus::Smokes,
            ..PatientRecord::default()
        };
        let page = PageView::base(&PatientForm::from(&record), Diagnosis::NotSubmitted.message());
        let selected: Vec<&str> = page
            .controls
            .iter()
            .filter_map(|c| match c {
                Control::Select { name: "smoking_status", choices, .. } => {
                    choices.iter().find(|c| c.selected).map(|c| c.label)
                }
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec!["Smokes"]);
    }
}
