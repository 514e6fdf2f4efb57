//! Static training knowledge used when no model is wired up.

use super::quick;

#[derive(Debug)]
pub struct ExerciseFacts {
    pub title: &'static str,
    pub technique: &'static str,
    pub progression: &'static str,
    pub auxiliary: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug)]
pub struct NutritionFacts {
    pub protein: &'static str,
    pub carbohydrates: &'static str,
    pub fats: &'static str,
    pub hydration: &'static str,
}

#[derive(Debug)]
pub struct RecoveryFacts {
    pub sleep: &'static str,
    pub rest_days: &'static str,
    pub stretching: &'static str,
}

#[derive(Debug)]
pub struct TrainingKnowledge {
    pub bench_press: ExerciseFacts,
    pub squat: ExerciseFacts,
    pub deadlift: ExerciseFacts,
    pub nutrition: NutritionFacts,
    pub recovery: RecoveryFacts,
}

pub static TRAINING_KNOWLEDGE: TrainingKnowledge = TrainingKnowledge {
    bench_press: ExerciseFacts {
        title: "Para mejorar tu press de banca:",
        technique: "1) Acuéstate con la espalda arqueada y pies firmes en el suelo, 2) Agarra la barra con manos ligeramente más anchas que los hombros, 3) Baja la barra controladamente hasta el pecho, 4) Empuja hacia arriba manteniendo la posición",
        progression: "Aumenta 2.5-5kg por semana, 3 series de 8-12 repeticiones",
        auxiliary: "Press inclinado, fondos, press de hombro, flexiones",
        tips: &[
            "Enfócate en la técnica antes que el peso",
            "Respira correctamente (exhala al empujar)",
            "Mantén el core activo durante todo el movimiento",
            "Descansa 2-3 minutos entre series",
        ],
    },
    squat: ExerciseFacts {
        title: "Para mejorar tus sentadillas:",
        technique: "1) Pies separados al ancho de hombros, 2) Mantén el pecho alto y espalda recta, 3) Empuja las rodillas hacia afuera, 4) Baja hasta que los muslos estén paralelos al suelo",
        progression: "Aumenta 5-10kg por semana, 3 series de 8-12 repeticiones",
        auxiliary: "Sentadilla frontal, sentadilla búlgara, extensiones de pierna",
        tips: &[
            "Mantén el peso en los talones",
            "No dejes que las rodillas se doblen hacia adentro",
            "Respira profundamente en la posición baja",
            "Incluye variaciones para desarrollo completo",
        ],
    },
    deadlift: ExerciseFacts {
        title: "Para mejorar tu peso muerto:",
        technique: "1) Barra cerca de las espinillas, 2) Espalda recta y pecho alto, 3) Empuja el suelo con los pies, 4) Mantén la barra cerca del cuerpo",
        progression: "Aumenta 5-10kg por semana, 3 series de 5-8 repeticiones",
        auxiliary: "Peso muerto rumano, buenos días, hiperextensiones",
        tips: &[
            "Nunca redondees la espalda",
            "Mantén la barra cerca del cuerpo",
            "Empuja con las piernas, no tires con la espalda",
            "Calienta bien antes de cargar peso",
        ],
    },
    nutrition: NutritionFacts {
        protein: "1.6-2.2g por kg de peso corporal al día",
        carbohydrates: "3-7g por kg de peso corporal al día",
        fats: "0.8-1.2g por kg de peso corporal al día",
        hydration: "2-3L de agua al día, más durante el entrenamiento",
    },
    recovery: RecoveryFacts {
        sleep: "7-9 horas de sueño por noche",
        rest_days: "48-72h entre grupos musculares",
        stretching: "10-15 minutos después del entrenamiento",
    },
};

impl ExerciseFacts {
    fn render(&self) -> String {
        let tips: Vec<String> = self.tips.iter().map(|tip| format!("- {tip}")).collect();
        format!(
            "{}\n\n🏋️ TÉCNICA:\n{}\n\n📈 PROGRESIÓN:\n{}\n\n💪 EJERCICIOS AUXILIARES:\n{}\n\n💡 CONSEJOS:\n{}",
            self.title,
            self.technique,
            self.progression,
            self.auxiliary,
            tips.join("\n")
        )
    }
}

impl NutritionFacts {
    fn render(&self) -> String {
        format!(
            "Para una nutrición óptima:\n\n\
             🥩 PROTEÍNA:\n{} - Distribuye en 4-6 comidas\n\n\
             🍞 CARBOHIDRATOS:\n{} - Principal fuente de energía\n\n\
             🥑 GRASAS:\n{} - Esenciales para hormonas\n\n\
             💧 HIDRATACIÓN:\n{}\n\n\
             ⏰ TIMING:\n\
             - Come 1-2 horas antes del entrenamiento\n\
             - Consume proteína dentro de 30 min post-entrenamiento\n\
             - Incluye carbohidratos para recuperación",
            self.protein, self.carbohydrates, self.fats, self.hydration
        )
    }
}

impl RecoveryFacts {
    fn render(&self) -> String {
        format!(
            "Para una recuperación óptima:\n\n\
             😴 SUEÑO:\n{} - Esencial para crecimiento muscular\n\n\
             🛌 DÍAS DE DESCANSO:\n{} - Permite reparación muscular\n\n\
             🧘 ESTRÉS:\n- Minimiza estrés mental\n- Incluye actividades relajantes\n- Considera meditación\n\n\
             💆 MOVILIDAD:\n{} - Mejora flexibilidad y recuperación\n\n\
             🔄 DELOAD:\n- Semana de descarga cada 4-6 semanas\n- Reduce volumen 50-70%\n- Mantén intensidad moderada\n\n\
             💧 HIDRATACIÓN:\n- 2-3L de agua al día\n- Más durante entrenamientos intensos\n- Considera electrolitos",
            self.sleep, self.rest_days, self.stretching
        )
    }
}

/// Answers a chat message from the static knowledge alone.
///
/// Exercise, nutrition and recovery topics are rendered from
/// [`TRAINING_KNOWLEDGE`]; other known topics reuse the quick-response text;
/// anything else gets the general training principles quoting the question.
pub fn answer(message: &str) -> String {
    let Some(entry) = quick::find(message) else {
        return general_advice(message);
    };

    let knowledge = &TRAINING_KNOWLEDGE;
    match entry.category {
        "press banca" => knowledge.bench_press.render(),
        "sentadilla" => knowledge.squat.render(),
        "peso muerto" => knowledge.deadlift.render(),
        "proteína" => knowledge.nutrition.render(),
        "descanso" => knowledge.recovery.render(),
        _ => entry.text.to_string(),
    }
}

pub fn general_advice(message: &str) -> String {
    format!(
        "Entiendo tu pregunta sobre '{message}'.

Como asistente de entrenamiento, te recomiendo estos principios fundamentales:

💪 CONSISTENCIA:
- Mantén una rutina regular
- No te saltes entrenamientos
- Sé paciente con el progreso

📈 PROGRESIÓN:
- Aumenta peso/intensidad gradualmente
- Registra tus entrenamientos
- Celebra pequeños avances

🏋️ TÉCNICA:
- Prioriza la forma sobre el peso
- Aprende de expertos
- Graba y revisa tus movimientos

🥗 NUTRICIÓN:
- Come suficiente proteína (1.6-2.2g/kg)
- Hidrátate bien (2-3L agua/día)
- Come 1-2h antes del entrenamiento

🛌 RECUPERACIÓN:
- Duerme 7-9 horas por noche
- Descansa 48-72h entre grupos musculares
- Incluye días de descanso

¿Hay algo específico sobre lo que quieras profundizar? Puedo ayudarte con:
- Técnica de ejercicios específicos
- Nutrición y suplementación
- Programación de entrenamiento
- Superación de mesetas
- Recuperación y descanso"
    )
}

/// Summarizes a training-data dump without interpreting it.
pub fn analysis_summary(training_data: &str, reasoning_level: &str) -> String {
    let received = training_data.chars().count();
    format!(
        "
Análisis inteligente de tus datos de entrenamiento:

📊 RESUMEN:
- Datos recibidos: {received} caracteres
- Nivel de análisis: {reasoning_level}

💡 RECOMENDACIONES GENERALES:
1. Mantén consistencia en tu rutina
2. Progresión gradual de peso/intensidad
3. Técnica correcta antes que peso
4. Nutrición adecuada (1.6-2.2g proteína/kg)
5. Descanso suficiente (7-9h sueño)

🎯 PRÓXIMOS PASOS:
- Revisa tu técnica regularmente
- Ajusta la intensidad según progreso
- Varía ejercicios cada 4-6 semanas
- Incluye días de descanso activo

📈 MONITOREO:
- Registra tus entrenamientos
- Mide progreso semanal/mensual
- Ajusta según resultados

Este análisis se basa en principios científicos del entrenamiento de fuerza.
"
    )
}

/// Reply used while the model is unavailable in a serverless deployment.
pub fn setup_fallback(message: &str) -> String {
    if let Some(entry) = quick::find(message) {
        return entry.text.to_string();
    }

    format!(
        "¡Hola! Soy GymBro, tu entrenador personal.

Veo que me has preguntado: \"{message}\"

Actualmente estoy en modo de configuración mientras se carga mi modelo de IA avanzado. Por favor, intenta de nuevo en unos minutos cuando el sistema esté completamente operativo.

Mientras tanto, puedo ayudarte con algunas preguntas básicas sobre fitness y entrenamiento. ¿En qué puedo asistirte?"
    )
}
