//! Canned advice for the most common training questions.
//!
//! Categories are scanned in declaration order and the first one with a
//! keyword contained in the lower-cased message wins. There is no scoring.

/// One category of the keyword table.
#[derive(Debug)]
pub struct QuickResponse {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub text: &'static str,
}

impl QuickResponse {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Returns the first category whose keywords appear in `message`.
pub fn find(message: &str) -> Option<&'static QuickResponse> {
    let lowered = message.to_lowercase();
    QUICK_RESPONSES.iter().find(|entry| entry.matches(&lowered))
}

pub static QUICK_RESPONSES: &[QuickResponse] = &[
    QuickResponse {
        category: "press banca",
        keywords: &["press", "banca", "pecho", "bench"],
        text: r#"Para mejorar tu press de banca:

🏋️ TÉCNICA:
• Acuéstate con espalda arqueada y pies firmes
• Agarra la barra ligeramente más ancha que hombros
• Baja controladamente hasta el pecho
• Empuja hacia arriba manteniendo posición

📈 PROGRESIÓN:
• Aumenta 2.5-5kg por semana
• 3 series de 8-12 repeticiones

💪 EJERCICIOS AUXILIARES:
• Press inclinado, fondos, press hombro
• Flexiones, press francés

💡 CONSEJOS:
• Enfócate en técnica antes que peso
• Respira correctamente (exhala al empujar)
• Mantén core activo durante movimiento
• Descansa 2-3 minutos entre series"#,
    },
    QuickResponse {
        category: "sentadilla",
        keywords: &["sentadilla", "squat", "pierna", "leg"],
        text: r#"Para mejorar tus sentadillas:

🏋️ TÉCNICA:
• Pies separados al ancho de hombros
• Mantén pecho alto y espalda recta
• Empuja rodillas hacia afuera
• Baja hasta muslos paralelos al suelo

📈 PROGRESIÓN:
• Aumenta 5-10kg por semana
• 3 series de 8-12 repeticiones

💪 EJERCICIOS AUXILIARES:
• Sentadilla frontal, búlgara
• Extensiones de pierna, zancadas

💡 CONSEJOS:
• Mantén peso en los talones
• No dejes rodillas doblarse hacia adentro
• Respira profundamente en posición baja
• Incluye variaciones para desarrollo completo"#,
    },
    QuickResponse {
        category: "peso muerto",
        keywords: &["peso muerto", "deadlift", "muerto"],
        text: r#"Para mejorar tu peso muerto:

🏋️ TÉCNICA:
• Barra cerca de las espinillas
• Espalda recta y pecho alto
• Empuja el suelo con los pies
• Mantén barra cerca del cuerpo

📈 PROGRESIÓN:
• Aumenta 5-10kg por semana
• 3 series de 5-8 repeticiones

💪 EJERCICIOS AUXILIARES:
• Peso muerto rumano, buenos días
• Hiperextensiones, puente de glúteos

💡 CONSEJOS:
• Nunca redondees la espalda
• Mantén barra cerca del cuerpo
• Empuja con piernas, no tires con espalda
• Calienta bien antes de cargar peso"#,
    },
    QuickResponse {
        category: "proteína",
        keywords: &["proteína", "proteina", "nutrición", "nutricion", "comida", "alimentación"],
        text: r#"Para nutrición óptima:

🥩 PROTEÍNA:
• 1.6-2.2g por kg de peso corporal
• Distribuye en 4-6 comidas

🍞 CARBOHIDRATOS:
• 3-7g por kg de peso corporal
• Principal fuente de energía

🥑 GRASAS:
• 0.8-1.2g por kg de peso corporal
• Esenciales para hormonas

💧 HIDRATACIÓN:
• 2-3L de agua al día
• Más durante entrenamiento

⏰ TIMING:
• Come 1-2 horas antes del entrenamiento
• Consume proteína dentro de 30 min post-entrenamiento
• Incluye carbohidratos para recuperación"#,
    },
    QuickResponse {
        category: "meseta",
        keywords: &["meseta", "estancado", "progreso", "avance"],
        text: r#"Para superar una meseta:

🔄 VARIACIÓN:
• Cambia rutina cada 4-6 semanas
• Añade ejercicios nuevos
• Varía repeticiones y series

📈 INTENSIDAD:
• Aumenta peso gradualmente
• Incluye series de alta intensidad
• Considera periodización

💪 VOLUMEN:
• Aumenta series o repeticiones
• Añade días de entrenamiento
• Incluye ejercicios auxiliares

🛌 RECUPERACIÓN:
• Revisa descanso (7-9h sueño)
• Considera deload semanal
• Optimiza nutrición

🎯 MENTALIDAD:
• Mantén diario de entrenamiento
• Establece metas específicas
• Celebra pequeños progresos"#,
    },
    QuickResponse {
        category: "cardio",
        keywords: &["cardio", "aeróbico", "aerobico", "correr", "bicicleta"],
        text: r#"Para cardio efectivo:

⏰ TIMING:
• Haz cardio DESPUÉS de pesas
• 20-30 minutos 3-4 veces por semana
• Intensidad moderada (70-80% FC máx)

🔥 TIPOS:
• HIIT: 20-30s alta intensidad, 1-2 min descanso
• LISS: 30-45 minutos ritmo constante
• Circuitos: Combinar cardio y fuerza

🎯 OBJETIVOS:
• Pérdida de grasa: HIIT + LISS
• Resistencia: LISS principalmente
• Rendimiento: HIIT específico

💡 CONSEJOS:
• Adapta según objetivos
• No exageres (puede afectar ganancias)
• Hidrátate bien durante cardio"#,
    },
    QuickResponse {
        category: "descanso",
        keywords: &["descanso", "recuperación", "recuperacion", "dormir", "sueño"],
        text: r#"Para recuperación óptima:

😴 SUEÑO:
• 7-9 horas por noche
• Esencial para crecimiento muscular

🛌 DÍAS DE DESCANSO:
• 48-72h entre grupos musculares
• Permite reparación muscular

🧘 ESTRÉS:
• Minimiza estrés mental
• Incluye actividades relajantes
• Considera meditación

💆 MOVILIDAD:
• 10-15 minutos después del entrenamiento
• Mejora flexibilidad y recuperación

🔄 DELOAD:
• Semana de descarga cada 4-6 semanas
• Reduce volumen 50-70%
• Mantén intensidad moderada

💧 HIDRATACIÓN:
• 2-3L de agua al día
• Más durante entrenamientos intensos
• Considera electrolitos"#,
    },
    QuickResponse {
        category: "técnica",
        keywords: &["técnica", "tecnica", "forma", "ejecución", "ejecucion"],
        text: r#"Para mejorar tu técnica:

🎯 FUNDAMENTOS:
• Comienza con pesos ligeros
• Enfócate en mente-músculo
• Respira correctamente (exhala en esfuerzo)

📹 ANÁLISIS:
• Graba series para revisar
• Compara con videos de referencia
• Busca feedback de entrenadores

🧠 CONCENTRACIÓN:
• Elimina distracciones
• Visualiza movimiento
• Mantén core activo

📚 EDUCACIÓN:
• Estudia biomecánica
• Aprende de expertos
• Practica movimientos sin peso

⏰ PROGRESIÓN:
• Domina técnica antes de aumentar peso
• Añade peso gradualmente
• Revisa técnica regularmente"#,
    },
    QuickResponse {
        category: "suplementos",
        keywords: &["suplementos", "suplemento", "proteína en polvo", "creatina", "bcaa", "vitamina"],
        text: r#"Para suplementación efectiva:

🥛 PROTEÍNA EN POLVO:
• 20-30g post-entrenamiento
• Whey para recuperación rápida
• Caseína para recuperación lenta

💊 CREATINA:
• 5g diarios (monohidrato)
• Mejora fuerza y potencia
• No necesita carga

🧠 BCAA:
• Durante entrenamientos largos
• Ayuda con fatiga muscular
• Preserva masa muscular

🩸 VITAMINA D:
• 2000-4000 UI diarias
• Esencial para hormonas
• Mejora recuperación

💪 PRE-ENTRENO:
• Solo si es necesario
• Contiene cafeína y creatina
• No usar todos los días

💡 CONSEJOS:
• Prioriza nutrición real
• Consulta con profesional
• No exageres con suplementos"#,
    },
    QuickResponse {
        category: "lesiones",
        keywords: &["lesión", "lesion", "dolor", "injury", "rehabilitación", "rehabilitacion"],
        text: r#"Para prevenir y tratar lesiones:

🛡️ PREVENCIÓN:
• Calienta 10-15 minutos
• Estira después del entrenamiento
• Progresa gradualmente

💪 FORTALECIMIENTO:
• Trabaja músculos estabilizadores
• Incluye ejercicios de equilibrio
• Fortalece core y glúteos

🩹 LESIONES COMUNES:
• Rodilla: Fortalece cuádriceps
• Espalda: Mejora técnica
• Hombro: Estira y fortalece

⏰ RECUPERACIÓN:
• Descansa lesiones agudas
• Usa hielo para inflamación
• Consulta fisioterapeuta

💡 CONSEJOS:
• Escucha tu cuerpo
• No ignores el dolor
• Regresa gradualmente al entrenamiento"#,
    },
    QuickResponse {
        category: "motivación",
        keywords: &["motivación", "motivacion", "motivado", "motivada", "ánimo", "animo", "inspiración"],
        text: r#"Para mantener la motivación:

🎯 METAS CLARAS:
• Establece objetivos específicos
• Divide en metas pequeñas
• Celebra cada logro

📊 SEGUIMIENTO:
• Lleva diario de entrenamiento
• Toma fotos de progreso
• Mide resultados regularmente

👥 COMUNIDAD:
• Entrena con amigos
• Únete a grupos de fitness
• Comparte tus logros

🧠 MENTALIDAD:
• Enfócate en el proceso
• Acepta altibajos
• Visualiza tu versión mejor

💡 CONSEJOS:
• Crea rutinas consistentes
• Varía tus entrenamientos
• Recuerda por qué empezaste"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("¿Cómo mejora mi sentadilla?", "sentadilla")]
    #[case("Quiero subir mi BENCH", "press banca")]
    #[case("me duele al hacer peso muerto", "peso muerto")]
    #[case("¿Cuánta proteína necesito?", "proteína")]
    #[case("Estoy estancado desde hace un mes", "meseta")]
    #[case("¿Es bueno correr en ayunas?", "cardio")]
    #[case("No puedo dormir bien", "descanso")]
    #[case("¿Mi ejecución es correcta?", "técnica")]
    #[case("¿Sirve la creatina?", "suplementos")]
    #[case("Tengo una lesión en el hombro", "lesiones")]
    #[case("Me falta ánimo para entrenar", "motivación")]
    fn test_keyword_selects_category(#[case] message: &str, #[case] category: &str) {
        let entry = find(message).expect("keyword should match");
        assert_eq!(entry.category, category);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // "pecho" (press banca) and "sentadilla" both match; press banca is declared first.
        let entry = find("sentadilla y pecho el mismo día").unwrap();
        assert_eq!(entry.category, "press banca");
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(find("hola").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(QUICK_RESPONSES.len(), 11);
        for entry in QUICK_RESPONSES {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.category);
            assert!(!entry.text.is_empty());
        }
    }

    #[test]
    fn test_sentadilla_text_is_returned_verbatim() {
        let entry = find("¿Cómo mejora mi sentadilla?").unwrap();
        assert!(entry.text.starts_with("Para mejorar tus sentadillas:\n\n🏋️ TÉCNICA:"));
        assert!(entry.text.ends_with("• Incluye variaciones para desarrollo completo"));
    }
}
